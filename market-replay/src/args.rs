use clap::Parser;
use std::path::PathBuf;

/// Replays a nomination log into the market valuation engine and reports
/// the resulting prices and portfolios.
#[derive(Parser, Debug)]
#[command(name = "market-replay")]
#[command(about = "Nomination market replay and valuation reporter", long_about = None)]
pub struct Args {
    /// Path to the nomination log: a headerless CSV with one row per vote,
    /// columns instrument,participant,weight,win,session,skip.
    pub log: PathBuf,

    /// Write the per-session price history as JSON to this path.
    #[arg(long)]
    pub history_out: Option<PathBuf>,

    /// Write the per-participant holdings report as JSON to this path.
    #[arg(long)]
    pub holders_out: Option<PathBuf>,

    /// Session number the replay starts in.
    #[arg(long, default_value_t = 1)]
    pub start_session: u32,

    /// Suppress the console report (file sinks are still written).
    #[arg(long)]
    pub quiet: bool,
}
