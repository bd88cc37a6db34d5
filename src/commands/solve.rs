//! Solve command - Find a pair summing to the target

use std::{fs::File, io, io::Read, path::PathBuf};

use anyhow::{Context, Result};

use crate::{
    finder::find_pair,
    input::PairInput,
    output::{render_outcome, BracketStyle},
};

/// Read one problem instance and print the result line
pub fn execute(input: Option<PathBuf>, style: BracketStyle) -> Result<()> {
    let line = match input {
        Some(path) => {
            let file = File::open(&path)
                .with_context(|| format!("failed to open input file {}", path.display()))?;
            run(file, style)?
        }
        None => run(io::stdin().lock(), style)?,
    };

    println!("{}", line);
    Ok(())
}

/// Produce the result line for the instance read from `reader`
pub fn run<R: Read>(reader: R, style: BracketStyle) -> Result<String> {
    let parsed = PairInput::from_reader(reader)?;

    log::info!(
        "searching {} integers for a pair summing to {}",
        parsed.nums.len(),
        parsed.target
    );

    let outcome = find_pair(&parsed.nums, parsed.target);
    Ok(render_outcome(outcome, style))
}
