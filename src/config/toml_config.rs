use crate::config::{Demo, Settings};
use crate::core::Record;
use crate::utils::error::{Result, ShowcaseError};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// On-disk configuration. Every section is optional; missing values fall
/// back to [`Settings::default`].
///
/// ```toml
/// demo = "users"
///
/// [provider]
/// delay_ms = 250
///
/// [sample]
/// name = "Ann"
/// contact = "ann@x.io"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub demo: Option<Demo>,
    pub provider: Option<ProviderConfig>,
    pub sample: Option<Record>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub delay_ms: Option<u64>,
}

impl TomlConfig {
    /// 從檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ShowcaseError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn into_settings(self) -> Settings {
        let defaults = Settings::default();
        Settings {
            demo: self.demo.unwrap_or(defaults.demo),
            sample: self.sample.unwrap_or(defaults.sample),
            delay_ms: self
                .provider
                .and_then(|p| p.delay_ms)
                .unwrap_or(defaults.delay_ms),
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.clone().into_settings().validate()
    }
}
