use std::{path::PathBuf, time::Duration};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::output::BracketStyle;

const APP_NAME: &str = "pair-finder";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub bracket_style: BracketStyle,
    pub color: bool,
    pub judge_timeout_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bracket_style: BracketStyle::Spaced,
            color: true,
            judge_timeout_ms: 5000,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config: Config = confy::load(APP_NAME, None)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        confy::store(APP_NAME, None, self)?;
        Ok(())
    }

    pub fn judge_timeout(&self) -> Duration {
        Duration::from_millis(self.judge_timeout_ms)
    }
}

pub fn get_config_path() -> Result<PathBuf> {
    let config_path = confy::get_configuration_file_path(APP_NAME, None)?;
    Ok(config_path)
}

pub fn reset_config() -> Result<Config> {
    let config = Config::default();
    config.save()?;
    Ok(config)
}
