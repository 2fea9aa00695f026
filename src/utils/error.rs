use thiserror::Error;

#[derive(Error, Debug)]
pub enum MarathonError {
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Config parse error in {field}: {message}")]
    ConfigParseError { field: String, message: String },

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Marathon responded with HTTP {status} for {url}")]
    HttpStatusError { status: u16, url: String },

    #[error("Decode error: {0}")]
    DecodeError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to serialize output: {0}")]
    SerializationError(serde_json::Error),
}

/// Coarse classification used by the binary to pick an exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Network,
    HttpStatus,
    Decode,
    Output,
}

impl MarathonError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::ConfigParseError { .. }
            | Self::IoError(_) => ErrorCategory::Configuration,
            Self::NetworkError(_) => ErrorCategory::Network,
            Self::HttpStatusError { .. } => ErrorCategory::HttpStatus,
            Self::DecodeError(_) => ErrorCategory::Decode,
            Self::SerializationError(_) => ErrorCategory::Output,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => {
                "Check --marathon-location (host:port) and --marathon-protocol (http or https)"
            }
            ErrorCategory::Network => "Make sure Marathon is reachable from this host",
            ErrorCategory::HttpStatus => "Check Marathon credentials and that the requested app exists",
            ErrorCategory::Decode => "Marathon returned an unexpected payload; check the API version",
            ErrorCategory::Output => "Writing results failed; this is a bug in marathon-consul",
        }
    }
}

pub type Result<T> = std::result::Result<T, MarathonError>;
