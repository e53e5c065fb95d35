use crate::engine::Engine;
use crate::error::{EngineError, Result};
use crate::models::VoteEvent;
use log::info;

/// Drives an engine through an ordered, finite event stream.
///
/// The replayer owns the session-boundary bookkeeping and nothing else:
/// it advances the engine's session when an event's session number changes,
/// applies every event, and finalizes the engine when the stream ends. All
/// valuation state lives in the engine.
#[derive(Debug, Default)]
pub struct Replayer;

impl Replayer {
    pub fn new() -> Self {
        Self
    }

    /// Folds `events` into `engine` in order.
    ///
    /// Fails with [`EngineError::OutOfOrderSession`] the moment an event's
    /// session number is lower than the session currently open; nothing is
    /// repaired and the engine is left unfinalized for inspection.
    pub fn run<I>(&self, engine: &mut Engine, events: I) -> Result<()>
    where
        I: IntoIterator<Item = VoteEvent>,
    {
        let mut current_session = engine.current_session();
        let mut applied = 0usize;

        for event in events {
            if event.session() < current_session {
                return Err(EngineError::OutOfOrderSession {
                    current: current_session,
                    got: event.session(),
                });
            }
            if event.session() != current_session {
                engine.advance_session(event.session())?;
                current_session = event.session();
            }
            engine.apply_event(&event)?;
            applied += 1;
        }

        engine.finalize();
        info!(
            "replay complete: {} events, final session {}",
            applied, current_session
        );
        Ok(())
    }
}
