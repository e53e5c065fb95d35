//! Deterministic valuation core for the nomination market: instruments,
//! portfolios, per-session price history, and the replay driver that folds
//! an ordered event log into them. No I/O happens in this crate; sources and
//! sinks live with the binary.

pub mod engine;
pub mod error;
pub mod models;
pub mod replay;

pub use engine::Engine;
pub use error::EngineError;
pub use replay::Replayer;
