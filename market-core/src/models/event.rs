use super::ids::{InstrumentId, ParticipantId};
use serde::{Deserialize, Serialize};

/// One validated record of the nomination log.
///
/// The source layer guarantees non-empty identifiers and a session number of
/// at least 1 before an event reaches the engine; the engine only checks
/// ordering across events, not field shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteEvent {
    instrument: InstrumentId,
    participant: ParticipantId,
    weight: i64,
    win: bool,
    session: u32,
    skipped: bool,
}

impl VoteEvent {
    pub fn new(
        instrument: InstrumentId,
        participant: ParticipantId,
        weight: i64,
        win: bool,
        session: u32,
        skipped: bool,
    ) -> Self {
        Self {
            instrument,
            participant,
            weight,
            win,
            session,
            skipped,
        }
    }

    pub fn instrument(&self) -> &InstrumentId {
        &self.instrument
    }

    pub fn participant(&self) -> &ParticipantId {
        &self.participant
    }

    /// Signed vote weight. Negative weights are permitted and drive the
    /// price down.
    pub fn weight(&self) -> i64 {
        self.weight
    }

    /// A winning vote zeroes its instrument's price after the weight is
    /// applied.
    pub fn win(&self) -> bool {
        self.win
    }

    pub fn session(&self) -> u32 {
        self.session
    }

    /// Skipped events are observed for session sequencing but mutate
    /// nothing.
    pub fn skipped(&self) -> bool {
        self.skipped
    }
}
