use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use market_core::{Engine, Replayer};

pub mod args;
pub mod report;
pub mod source;

use args::Args;
use report::ReportBuilder;

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    let events = source::read_events(&args.log)
        .with_context(|| format!("reading nomination log {}", args.log.display()))?;
    info!(
        "replaying {} events starting at session {}",
        events.len(),
        args.start_session
    );

    let mut engine = Engine::starting_at(args.start_session);
    Replayer::new()
        .run(&mut engine, events)
        .context("replaying nomination log")?;

    let report = ReportBuilder::new(&engine);

    if let Some(path) = &args.history_out {
        report
            .write_history(path)
            .with_context(|| format!("writing price history to {}", path.display()))?;
    }
    if let Some(path) = &args.holders_out {
        report
            .write_holders(path)
            .with_context(|| format!("writing holders report to {}", path.display()))?;
    }
    if !args.quiet {
        print!("{}", report.render_console());
    }

    Ok(())
}
