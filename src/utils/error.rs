use thiserror::Error;

/// Failures raised by a data provider while fetching or saving a record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("Provider unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("Provider rejected the request: {reason}")]
    Rejected { reason: String },
}

#[derive(Error, Debug)]
pub enum ShowcaseError {
    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl ShowcaseError {
    /// Short message for stderr, without the nested source chain.
    pub fn user_friendly_message(&self) -> String {
        match self {
            ShowcaseError::Provider(e) => format!("Data provider failed: {}", e),
            ShowcaseError::IoError(e) => format!("Could not access a file: {}", e),
            ShowcaseError::TomlError(_) => "Configuration file is not valid TOML".to_string(),
            ShowcaseError::SerializationError(_) => "Could not serialize a record".to_string(),
            ShowcaseError::InvalidConfigValueError { field, reason, .. } => {
                format!("{}: {}", field, reason)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ShowcaseError>;
