//! Number validation and trip fuel planning CLI.
//!
//! Prints the validation of a fixed set of four numbers, then fuel, cost and
//! duration estimates for a fixed trip at each tabulated speed, ending with
//! the cheapest speed.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use tripcheck::core::trip::TripPlanner;
use tripcheck::exit_codes;
use tripcheck::logging;
use tripcheck::report::{build_report, render_json, render_text};

#[derive(Parser)]
#[command(
    name = "tripcheck",
    version,
    about = "Validate four numbers and compare trip fuel costs by speed"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the validation results and trip comparison (default).
    Report {
        /// Emit the report as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    logging::init();
    let cli = Cli::parse();
    let code = match run(cli) {
        Ok(()) => exit_codes::OK,
        Err(err) => {
            eprintln!("{:#}", err);
            exit_codes::INVALID
        }
    };
    std::process::exit(code);
}

fn run(cli: Cli) -> Result<()> {
    match cli.command.unwrap_or(Command::Report { json: false }) {
        Command::Report { json } => cmd_report(json),
    }
}

fn cmd_report(json: bool) -> Result<()> {
    let planner = TripPlanner::default();
    debug!(plan = ?planner.plan(), json, "building report");
    let report = build_report(&planner)?;
    let output = if json {
        render_json(&report)?
    } else {
        render_text(&report)
    };
    print!("{output}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_without_arguments() {
        let cli = Cli::parse_from(["tripcheck"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn parse_report_json() {
        let cli = Cli::parse_from(["tripcheck", "report", "--json"]);
        assert!(matches!(cli.command, Some(Command::Report { json: true })));
    }

    #[test]
    fn parse_report_defaults_to_text() {
        let cli = Cli::parse_from(["tripcheck", "report"]);
        assert!(matches!(cli.command, Some(Command::Report { json: false })));
    }
}
