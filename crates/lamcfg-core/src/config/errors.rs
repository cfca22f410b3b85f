use crate::errors::LamcfgError;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found at '{path}'")]
    MissingFile { path: String },

    #[error("IO error accessing config file: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("Invalid value '{value}' for {field}: {message}")]
    Validation {
        field: &'static str,
        value: String,
        message: &'static str,
    },
}

impl LamcfgError for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            ConfigError::MissingFile { .. } => "CONFIG_MISSING_FILE",
            ConfigError::Io { .. } => "CONFIG_IO_ERROR",
            ConfigError::Validation { .. } => "CONFIG_VALIDATION_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            ConfigError::MissingFile { .. } | ConfigError::Validation { .. }
        )
    }
}
