use thiserror::Error;

#[derive(Error, Debug)]
pub enum CountError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl CountError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            CountError::IoError(e) => format!("Could not read or write: {}", e),
            CountError::TomlError(_) => "The configuration file is not valid TOML".to_string(),
            CountError::ConfigError { message } => message.clone(),
            CountError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CountError>;
