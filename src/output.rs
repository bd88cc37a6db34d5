use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::finder::IndexPair;

pub const NOT_FOUND_MESSAGE: &str = "No valid pair found.";

/// How an index pair is bracketed on output: `[i, j]` or `[i,j]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BracketStyle {
    #[default]
    Spaced,
    Compact,
}

/// The single output line for a search result, without a trailing newline.
pub fn render_outcome(outcome: Option<IndexPair>, style: BracketStyle) -> String {
    match outcome {
        Some(pair) => pair.render(style),
        None => NOT_FOUND_MESSAGE.to_string(),
    }
}
