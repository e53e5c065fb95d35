//! Read-only reporting over a finished engine: per-participant holdings,
//! the market leaderboard, and the JSON sinks the graph frontends consume.

use chrono::{DateTime, Utc};
use log::info;
use market_core::models::{InstrumentId, ParticipantId};
use market_core::Engine;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs::File;
use std::path::Path;
use thiserror::Error;
use uuid::Uuid;

/// Errors raised while writing report sinks.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

/// One instrument line of a participant's holdings.
#[derive(Debug, Clone, Serialize)]
pub struct HoldingSummary {
    pub units: u32,
    pub value: i64,
}

/// Everything reported for one participant.
#[derive(Debug, Clone, Serialize)]
pub struct ParticipantSummary {
    pub participant: ParticipantId,
    pub portfolio_value: i64,
    pub holdings: BTreeMap<InstrumentId, HoldingSummary>,
}

/// One row of the market leaderboard.
#[derive(Debug, Clone, Serialize)]
pub struct MarketRow {
    pub instrument: InstrumentId,
    pub price: i64,
    pub issuance: u32,
    pub market_cap: i64,
}

/// Payload of the holders sink: the summaries plus run metadata so a report
/// file can be traced back to the run that produced it.
#[derive(Debug, Serialize)]
pub struct HoldersReport {
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub total_market_cap: i64,
    pub participants: Vec<ParticipantSummary>,
}

/// Builds reports from an engine through its read-only query surface.
pub struct ReportBuilder<'a> {
    engine: &'a Engine,
    run_id: Uuid,
}

impl<'a> ReportBuilder<'a> {
    pub fn new(engine: &'a Engine) -> Self {
        Self {
            engine,
            run_id: Uuid::new_v4(),
        }
    }

    /// Participant summaries, sorted by participant id for stable output.
    pub fn participant_summaries(&self) -> Vec<ParticipantSummary> {
        let mut portfolios: Vec<_> = self.engine.portfolios().values().collect();
        portfolios.sort_by(|a, b| a.owner().cmp(b.owner()));

        portfolios
            .into_iter()
            .map(|portfolio| {
                let mut holdings = BTreeMap::new();
                for (instrument, units) in portfolio.iter() {
                    if let Some(listed) = self.engine.instruments().get(instrument) {
                        holdings.insert(
                            instrument.clone(),
                            HoldingSummary {
                                units: *units,
                                value: listed.price() * *units as i64,
                            },
                        );
                    }
                }
                ParticipantSummary {
                    participant: portfolio.owner().clone(),
                    portfolio_value: portfolio.value(self.engine.instruments()),
                    holdings,
                }
            })
            .collect()
    }

    /// Instruments sorted by market cap, largest first; ties break by id so
    /// the table is reproducible.
    pub fn market_rows(&self) -> Vec<MarketRow> {
        let mut rows: Vec<MarketRow> = self
            .engine
            .instruments()
            .values()
            .map(|instrument| MarketRow {
                instrument: instrument.id().clone(),
                price: instrument.price(),
                issuance: instrument.issuance(),
                market_cap: instrument.market_cap(),
            })
            .collect();
        rows.sort_by(|a, b| {
            b.market_cap
                .cmp(&a.market_cap)
                .then_with(|| a.instrument.cmp(&b.instrument))
        });
        rows
    }

    pub fn holders_report(&self) -> HoldersReport {
        HoldersReport {
            run_id: self.run_id,
            generated_at: Utc::now(),
            total_market_cap: self.engine.total_market_cap(),
            participants: self.participant_summaries(),
        }
    }

    /// Writes the per-session price history sink.
    pub fn write_history(&self, path: &Path) -> Result<(), ReportError> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, self.engine.history())?;
        info!("price history written to {}", path.display());
        Ok(())
    }

    /// Writes the holders sink.
    pub fn write_holders(&self, path: &Path) -> Result<(), ReportError> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, &self.holders_report())?;
        info!("holders report written to {}", path.display());
        Ok(())
    }

    /// Renders the console report: one block per participant, then the
    /// market leaderboard and the total market capitalization.
    pub fn render_console(&self) -> String {
        let mut out = String::new();

        for summary in self.participant_summaries() {
            let _ = writeln!(out, "{}", summary.participant);
            let _ = writeln!(out, "  Total portfolio value: {}", summary.portfolio_value);
            if !summary.holdings.is_empty() {
                let _ = writeln!(out, "  Holdings:");
                for (instrument, holding) in &summary.holdings {
                    let _ = writeln!(
                        out,
                        "    {}: {} units, value {}",
                        instrument, holding.units, holding.value
                    );
                }
            }
            let _ = writeln!(out);
        }

        let _ = writeln!(out, "Market, by market cap:");
        for row in self.market_rows() {
            let _ = writeln!(
                out,
                "  {:<24} price {:>6}  issuance {:>4}  market cap {:>8}",
                row.instrument.as_str(),
                row.price,
                row.issuance,
                row.market_cap
            );
        }
        let _ = writeln!(
            out,
            "Total market cap: {}",
            self.engine.total_market_cap()
        );

        out
    }
}
