mod inspect;

use anyhow::Result;
use tracing::info;

use crate::inspect::InspectConfig;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = InspectConfig::from_args(&args)?;
    info!(start = %config.board, moves = config.moves.len(), "clockwork starting");

    let report = inspect::run(&config);
    inspect::log_report(&report);
    Ok(())
}
