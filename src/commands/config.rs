//! Config command - Show and update persisted settings

use anyhow::Result;
use colored::Colorize;

use crate::{
    config::{get_config_path, reset_config, Config},
    output::BracketStyle,
};

/// Apply the given changes to the stored configuration and display it
pub fn execute(
    style: Option<BracketStyle>,
    color: Option<bool>,
    timeout_ms: Option<u64>,
    reset: bool,
) -> Result<()> {
    let mut config = if reset {
        println!("{}", "✓ Configuration reset to defaults".green());
        reset_config()?
    } else {
        Config::load()?
    };

    if apply_changes(&mut config, style, color, timeout_ms) {
        config.save()?;
        println!("{}", "✓ Configuration saved successfully!".green());
    }

    print_config(&config)?;
    Ok(())
}

/// Returns true if anything changed
fn apply_changes(
    config: &mut Config,
    style: Option<BracketStyle>,
    color: Option<bool>,
    timeout_ms: Option<u64>,
) -> bool {
    let mut changed = false;

    if let Some(s) = style {
        config.bracket_style = s;
        changed = true;
    }
    if let Some(c) = color {
        config.color = c;
        changed = true;
    }
    if let Some(t) = timeout_ms {
        config.judge_timeout_ms = t;
        changed = true;
    }

    changed
}

fn print_config(config: &Config) -> Result<()> {
    println!("{} {}", "Config file:".bold(), get_config_path()?.display());
    println!("  {:<18} {:?}", "bracket_style", config.bracket_style);
    println!("  {:<18} {}", "color", config.color);
    println!("  {:<18} {}", "judge_timeout_ms", config.judge_timeout_ms);
    Ok(())
}
