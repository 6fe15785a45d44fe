#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::Record;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

pub const MAX_DELAY_MS: u64 = 60_000;

/// Which showcase to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Demo {
    Users,
    Shapes,
    Animals,
    Workers,
    #[default]
    All,
}

/// Runtime settings shared by every entry point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub demo: Demo,
    pub sample: Record,
    pub delay_ms: u64,
}

impl Settings {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            demo: Demo::All,
            sample: Record::sample(),
            delay_ms: 0,
        }
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("sample.name", &self.sample.name)?;
        validate_non_empty_string("sample.contact", &self.sample.contact)?;
        validate_range("delay_ms", self.delay_ms, 0, MAX_DELAY_MS)?;
        Ok(())
    }
}
