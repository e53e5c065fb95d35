//! CSV event source for the nomination log.
//!
//! The log is the engine's only input: a headerless CSV, one row per vote,
//! columns `instrument,participant,weight,win,session,skip`. Everything is
//! validated here so the engine only ever sees well-formed events; any bad
//! row aborts the whole run with its row number.

use csv::{ReaderBuilder, StringRecord};
use log::info;
use market_core::models::{InstrumentId, ParticipantId, VoteEvent};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

/// Errors raised while reading and validating the nomination log. Rows are
/// never skipped or repaired.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The log file could not be opened or read.
    #[error("failed to read log: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV layer itself rejected the input.
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A row does not have exactly the six expected columns.
    #[error("row {row}: expected 6 fields, found {found}")]
    WrongFieldCount { row: u64, found: usize },

    /// An identifier column is empty.
    #[error("row {row}: {field} must not be empty")]
    EmptyField { row: u64, field: &'static str },

    /// A numeric column failed to parse.
    #[error("row {row}: invalid {field} '{value}': expected an integer")]
    InvalidInteger {
        row: u64,
        field: &'static str,
        value: String,
    },

    /// Sessions are numbered from 1.
    #[error("row {row}: session must be at least 1")]
    SessionOutOfRange { row: u64 },

    /// A flag column holds something other than the literal Y or N.
    #[error("row {row}: invalid {field} flag '{value}': expected Y or N")]
    InvalidFlag {
        row: u64,
        field: &'static str,
        value: String,
    },
}

/// Reads and validates the whole log.
pub fn read_events(path: &Path) -> Result<Vec<VoteEvent>, SourceError> {
    let file = File::open(path)?;
    let events = events_from_reader(file)?;
    info!("read {} events from {}", events.len(), path.display());
    Ok(events)
}

/// Reads events from any byte stream carrying the log format.
pub fn events_from_reader<R: Read>(input: R) -> Result<Vec<VoteEvent>, SourceError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input);

    let mut events = Vec::new();
    let mut row: u64 = 0;
    for record in reader.records() {
        row += 1;
        let record = record?;
        events.push(parse_record(row, &record)?);
    }
    Ok(events)
}

fn parse_record(row: u64, record: &StringRecord) -> Result<VoteEvent, SourceError> {
    if record.len() != 6 {
        return Err(SourceError::WrongFieldCount {
            row,
            found: record.len(),
        });
    }

    let instrument = require_text(row, "instrument", &record[0])?;
    let participant = require_text(row, "participant", &record[1])?;
    let weight = parse_weight(row, &record[2])?;
    let win = parse_flag(row, "win", &record[3])?;
    let session = parse_session(row, &record[4])?;
    let skipped = parse_flag(row, "skip", &record[5])?;

    Ok(VoteEvent::new(
        InstrumentId::new(instrument),
        ParticipantId::new(participant),
        weight,
        win,
        session,
        skipped,
    ))
}

fn require_text(row: u64, field: &'static str, value: &str) -> Result<String, SourceError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(SourceError::EmptyField { row, field });
    }
    Ok(trimmed.to_string())
}

fn parse_weight(row: u64, value: &str) -> Result<i64, SourceError> {
    value
        .trim()
        .parse()
        .map_err(|_| SourceError::InvalidInteger {
            row,
            field: "weight",
            value: value.to_string(),
        })
}

fn parse_session(row: u64, value: &str) -> Result<u32, SourceError> {
    let session: u32 = value
        .trim()
        .parse()
        .map_err(|_| SourceError::InvalidInteger {
            row,
            field: "session",
            value: value.to_string(),
        })?;
    if session == 0 {
        return Err(SourceError::SessionOutOfRange { row });
    }
    Ok(session)
}

fn parse_flag(row: u64, field: &'static str, value: &str) -> Result<bool, SourceError> {
    match value.trim() {
        "Y" => Ok(true),
        "N" => Ok(false),
        other => Err(SourceError::InvalidFlag {
            row,
            field,
            value: other.to_string(),
        }),
    }
}
