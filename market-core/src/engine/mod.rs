use crate::error::{EngineError, Result};
use crate::models::{Instrument, InstrumentId, ParticipantId, Portfolio, PriceHistory, VoteEvent};
use log::debug;
use std::collections::HashMap;

/// Lifecycle of an engine instance. Mutation is only legal before
/// finalization; queries are legal in any state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EngineState {
    Empty,
    Accumulating,
    Finalized,
}

/// The valuation engine. Owns the instrument and portfolio tables plus the
/// price history; all mutation flows through `apply_event`,
/// `advance_session` and `finalize`, driven by a single replay sequence.
pub struct Engine {
    instruments: HashMap<InstrumentId, Instrument>,
    portfolios: HashMap<ParticipantId, Portfolio>,
    history: PriceHistory,
    current_session: u32,
    state: EngineState,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// An engine whose session counter starts at 1, like the historical
    /// logs.
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// An engine whose session counter starts at `session`. Useful when a
    /// log is known to begin mid-series or may be empty.
    pub fn starting_at(session: u32) -> Self {
        Self {
            instruments: HashMap::new(),
            portfolios: HashMap::new(),
            history: PriceHistory::default(),
            current_session: session,
            state: EngineState::Empty,
        }
    }

    /// Applies one event.
    ///
    /// A skipped event is observed (it still moves the engine out of its
    /// empty state) but mutates neither instruments nor portfolios.
    /// Otherwise the instrument is listed or repriced, the participant's
    /// holding is incremented, and a winning vote's price is zeroed after
    /// its own weight was added: the win consumes the accumulated price,
    /// the winning weight included.
    pub fn apply_event(&mut self, event: &VoteEvent) -> Result<()> {
        if self.state == EngineState::Finalized {
            return Err(EngineError::EngineFinalized);
        }
        if event.session() < self.current_session {
            return Err(EngineError::OutOfOrderSession {
                current: self.current_session,
                got: event.session(),
            });
        }
        self.state = EngineState::Accumulating;

        if event.skipped() {
            return Ok(());
        }

        match self.instruments.get_mut(event.instrument()) {
            Some(instrument) => instrument.apply_vote(event.weight()),
            None => {
                debug!("listing new instrument '{}'", event.instrument());
                self.instruments.insert(
                    event.instrument().clone(),
                    Instrument::new(event.instrument().clone(), event.weight()),
                );
            }
        }

        self.portfolios
            .entry(event.participant().clone())
            .or_insert_with(|| {
                debug!("opening portfolio for '{}'", event.participant());
                Portfolio::new(event.participant().clone())
            })
            .add_unit(event.instrument());

        if event.win() {
            if let Some(instrument) = self.instruments.get_mut(event.instrument()) {
                debug!(
                    "win for '{}': price {} cleared",
                    instrument.id(),
                    instrument.price()
                );
                instrument.clear_price();
            }
        }

        Ok(())
    }

    /// Closes the currently open session: snapshots every listed
    /// instrument's price into the history under the current session number,
    /// then opens `new_session`. The driver calls this exactly once per
    /// boundary.
    pub fn advance_session(&mut self, new_session: u32) -> Result<()> {
        if self.state == EngineState::Finalized {
            return Err(EngineError::EngineFinalized);
        }
        if new_session < self.current_session {
            return Err(EngineError::OutOfOrderSession {
                current: self.current_session,
                got: new_session,
            });
        }

        self.history.record(self.current_session, &self.instruments);
        debug!(
            "session {} closed, session {} open",
            self.current_session, new_session
        );
        self.current_session = new_session;
        Ok(())
    }

    /// Snapshots the last open session and freezes the engine. Idempotent:
    /// a second call finds nothing changed and does nothing.
    pub fn finalize(&mut self) {
        if self.state == EngineState::Finalized {
            return;
        }
        self.history.record(self.current_session, &self.instruments);
        self.state = EngineState::Finalized;
    }

    /// Current price of one instrument. Unknown instruments are an error,
    /// never a silent zero.
    pub fn price(&self, instrument: &InstrumentId) -> Result<i64> {
        self.instruments
            .get(instrument)
            .map(Instrument::price)
            .ok_or_else(|| EngineError::UnknownInstrument(instrument.clone()))
    }

    /// Value of one participant's holdings against current prices (not the
    /// per-session snapshots; consumers wanting point-in-time numbers read
    /// the history directly).
    pub fn portfolio_value(&self, participant: &ParticipantId) -> Result<i64> {
        self.portfolios
            .get(participant)
            .map(|portfolio| portfolio.value(&self.instruments))
            .ok_or_else(|| EngineError::UnknownParticipant(participant.clone()))
    }

    /// Sum of price times issuance over every listed instrument. Zero for an
    /// engine that has seen no events.
    pub fn total_market_cap(&self) -> i64 {
        self.instruments.values().map(Instrument::market_cap).sum()
    }

    pub fn history(&self) -> &PriceHistory {
        &self.history
    }

    pub fn instruments(&self) -> &HashMap<InstrumentId, Instrument> {
        &self.instruments
    }

    pub fn portfolios(&self) -> &HashMap<ParticipantId, Portfolio> {
        &self.portfolios
    }

    pub fn current_session(&self) -> u32 {
        self.current_session
    }

    pub fn is_finalized(&self) -> bool {
        self.state == EngineState::Finalized
    }
}
