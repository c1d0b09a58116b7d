//! Command-line interface for the Fishcast scoring heuristics.
//!
//! Every subcommand reads one JSON request (stdin, or a file path), writes
//! one JSON response line to stdout, and exits:
//!
//! - `score`: combined dispatcher keyed on the request's `action` field.
//! - `hotspot` / `market`: single-action commands taking the bare field set.
//! - `profit`: ranks site/market pairings by expected profit.
//!
//! Options can come from CLI flags, configuration files, or `FISHCAST_*`
//! environment variables.
#![forbid(unsafe_code)]

use std::io::{Read, Write};

use clap::{Parser, Subcommand};
use fishcast_core::{Clock, SystemClock};

mod error;
mod logging;
mod profit;
mod request;
mod response;
mod score;

pub use error::CliError;
pub use logging::{LOG_ENV, init_logging};
pub use request::RequestSource;

use profit::{ProfitArgs, run_profit_with};
use score::{HotspotArgs, MarketArgs, ScoreArgs, run_hotspot_with, run_market_with, run_score_with};

const ARG_HOUR: &str = "hour";
const ARG_LIMIT: &str = "limit";

/// Run the Fishcast CLI with the current process arguments, environment,
/// stdin, and stdout.
///
/// # Errors
/// Returns [`CliError`] when arguments or configuration are invalid, or the
/// request cannot be read, decoded, or answered.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdin = std::io::stdin().lock();
    let mut stdout = std::io::stdout().lock();
    run_command(cli.command, &SystemClock, &mut stdin, &mut stdout)
}

fn run_command(
    command: Command,
    clock: &dyn Clock,
    stdin: &mut dyn Read,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    match command {
        Command::Score(args) => run_score_with(args, clock, stdin, writer),
        Command::Hotspot(args) => run_hotspot_with(args, clock, stdin, writer),
        Command::Market(args) => run_market_with(args, stdin, writer),
        Command::Profit(args) => run_profit_with(args, stdin, writer),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "fishcast",
    about = "Fishing hotspot and market timing heuristics",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score a request whose `action` selects hotspot or market scoring.
    Score(ScoreArgs),
    /// Score fishing suitability for a species.
    Hotspot(HotspotArgs),
    /// Score market timing.
    Market(MarketArgs),
    /// Rank fishing ground and market pairings by expected profit.
    Profit(ProfitArgs),
}

#[cfg(test)]
mod tests;
