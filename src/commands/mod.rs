//! Command modules for pair-finder
//!
//! Each submodule handles a specific CLI subcommand.

pub mod config;
pub mod judge;
pub mod solve;

use colored::Colorize;

use crate::judge::{FailedCase, Verdict};

/// Print the verdict of a judging run
pub fn print_verdict(verdict: &Verdict) {
    match verdict {
        Verdict::Accepted { passed } => {
            println!("{}", "✓ Accepted!".green().bold());
            println!("  {} test case(s) passed", passed);
        }
        Verdict::WrongAnswer(failed) => {
            println!("{}", "✗ Wrong Answer".red().bold());
            print_failed_case(failed);
        }
    }
}

fn print_failed_case(failed: &FailedCase) {
    println!(
        "  {} {}",
        "Failed on test case".bold(),
        format!("#{}", failed.index + 1).cyan()
    );
    println!("  {}", "Input:".bold());
    for line in failed.input.lines() {
        println!("    {}", line);
    }
    println!("  {} {}", "Expected:".bold(), failed.expected_output);
    println!("  {} {}", "Your output:".bold(), failed.actual_output);
    if let Some(ref error) = failed.error {
        println!("  {} {}", "Error:".bold(), error.trim().red());
    }
}
