use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

mod commands;
mod config;
mod finder;
mod input;
mod judge;
mod output;

use config::Config;
use output::BracketStyle;

#[derive(Parser)]
#[command(name = "pair-finder")]
#[command(about = "Find two elements that sum to a target, and judge programs that do")]
#[command(version = "0.1.0")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read a count, the integers, and a target, then print the first matching index pair
    Solve {
        /// Read input from a file instead of stdin
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Output bracket style (defaults to the configured style)
        #[arg(short, long, value_enum)]
        style: Option<BracketStyle>,
    },
    /// Run a suite of test cases and report a verdict
    Judge {
        /// JSON test case file (built-in Two Sum cases if omitted)
        #[arg(short, long)]
        cases: Option<PathBuf>,
        /// External program to judge (built-in finder if omitted)
        #[arg(short, long)]
        program: Option<PathBuf>,
        /// Per-case time limit for external programs, in milliseconds
        #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
        timeout_ms: Option<u64>,
    },
    /// Show or update the stored configuration
    Config {
        /// Default output bracket style
        #[arg(short, long, value_enum)]
        style: Option<BracketStyle>,
        /// Enable or disable colored output
        #[arg(long)]
        color: Option<bool>,
        /// Default per-case time limit for external programs, in milliseconds
        #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
        timeout_ms: Option<u64>,
        /// Restore the default configuration first
        #[arg(long)]
        reset: bool,
    },
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    // RUST_LOG still wins when set
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let config = Config::load().unwrap_or_else(|e| {
        log::warn!("could not load configuration, using defaults: {e:#}");
        Config::default()
    });
    if !config.color {
        colored::control::set_override(false);
    }

    match cli.command {
        Commands::Solve { input, style } => {
            commands::solve::execute(input, style.unwrap_or(config.bracket_style))?;
        }
        Commands::Judge {
            cases,
            program,
            timeout_ms,
        } => {
            commands::judge::execute(&config, cases, program, timeout_ms).await?;
        }
        Commands::Config {
            style,
            color,
            timeout_ms,
            reset,
        } => {
            commands::config::execute(style, color, timeout_ms, reset)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_timeout_rejected() {
        assert!(Cli::try_parse_from(["pair-finder", "judge", "--timeout-ms", "0"]).is_err());
        assert!(Cli::try_parse_from(["pair-finder", "config", "-t", "0"]).is_err());
    }

    #[test]
    fn test_positive_timeout_accepted() {
        let cli = Cli::try_parse_from(["pair-finder", "judge", "--timeout-ms", "250"]).unwrap();
        match cli.command {
            Commands::Judge { timeout_ms, .. } => assert_eq!(timeout_ms, Some(250)),
            _ => panic!("expected the judge subcommand"),
        }
    }

    #[test]
    fn test_style_flag() {
        let cli = Cli::try_parse_from(["pair-finder", "-v", "solve", "--style", "compact"]).unwrap();
        assert_eq!(cli.verbose, 1);
        match cli.command {
            Commands::Solve { style, input } => {
                assert_eq!(style, Some(BracketStyle::Compact));
                assert!(input.is_none());
            }
            _ => panic!("expected the solve subcommand"),
        }
    }
}
