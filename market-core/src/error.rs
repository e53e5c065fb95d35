use crate::models::{InstrumentId, ParticipantId};
use thiserror::Error;

/// Errors surfaced by the valuation engine and the replay driver.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A query referenced an instrument no accepted event has ever named.
    /// Unknown is distinct from "listed with a price of zero".
    #[error("unknown instrument '{0}'")]
    UnknownInstrument(InstrumentId),

    /// A query referenced a participant who has never cast a vote.
    #[error("unknown participant '{0}'")]
    UnknownParticipant(ParticipantId),

    /// The session counter went backwards. The log must be non-decreasing by
    /// session; no repair is attempted.
    #[error("out-of-order session: session {current} is open, got {got}")]
    OutOfOrderSession { current: u32, got: u32 },

    /// Mutation was attempted on an engine that has already been finalized.
    #[error("engine is finalized and accepts no further events")]
    EngineFinalized,
}

/// A specialized Result type for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;
