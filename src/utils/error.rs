use serde_json::Value;
use thiserror::Error;

/// Which way a request failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// No response arrived (connect, DNS, broken connection).
    Transport,
    /// Non-success status without a server-provided reason.
    HttpStatus,
    /// Non-success status whose body carried an `error` or `message` string.
    StructuredHttpStatus,
    /// Success status, but the body was not JSON.
    Decode,
    /// The request body could not be serialized.
    Encode,
}

/// The single failure shape returned by every `HttpClient` call.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct RequestError {
    pub kind: FailureKind,
    pub status: Option<u16>,
    pub message: String,
    pub details: Value,
}

impl RequestError {
    pub fn generic_message(status: u16) -> String {
        format!("HTTP error! status: {}", status)
    }

    /// Status failure with the generic message.
    pub fn http_status(status: u16, details: Value) -> Self {
        Self {
            kind: FailureKind::HttpStatus,
            status: Some(status),
            message: Self::generic_message(status),
            details,
        }
    }

    pub fn structured(status: u16, message: String, details: Value) -> Self {
        Self {
            kind: FailureKind::StructuredHttpStatus,
            status: Some(status),
            message,
            details,
        }
    }

    pub fn transport(err: &reqwest::Error) -> Self {
        Self {
            kind: FailureKind::Transport,
            status: None,
            message: format!("Request failed: {}", err),
            details: empty_details(),
        }
    }

    pub fn decode(status: u16, err: &serde_json::Error) -> Self {
        Self {
            kind: FailureKind::Decode,
            status: Some(status),
            message: format!("Invalid JSON in response: {}", err),
            details: empty_details(),
        }
    }

    pub fn encode(err: &serde_json::Error) -> Self {
        Self {
            kind: FailureKind::Encode,
            status: None,
            message: format!("Could not serialize request body: {}", err),
            details: empty_details(),
        }
    }

    /// True when `message` is the server's own reason rather than the
    /// generic status template.
    pub fn has_structured_message(&self) -> bool {
        self.kind == FailureKind::StructuredHttpStatus
    }
}

pub(crate) fn empty_details() -> Value {
    Value::Object(serde_json::Map::new())
}

#[derive(Error, Debug)]
pub enum FitTrackError {
    #[error(transparent)]
    Request(#[from] RequestError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl FitTrackError {
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            FitTrackError::ConfigError { .. } | FitTrackError::InvalidConfigValueError { .. }
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            FitTrackError::Request(e) if e.kind == FailureKind::Transport => {
                "Could not reach the FitTrack backend".to_string()
            }
            FitTrackError::Request(e) => e.message.clone(),
            FitTrackError::IoError(e) => format!("File access failed: {}", e),
            FitTrackError::ConfigError { message } => format!("Invalid configuration: {}", message),
            FitTrackError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid configuration value for '{}': {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FitTrackError::Request(e) => match e.kind {
                FailureKind::Transport => {
                    "Make sure the backend is running and base_url points at it (default port 5000)"
                }
                FailureKind::Decode => "Check that base_url points at the API root, not the web app",
                FailureKind::Encode => "Check the request payload",
                FailureKind::HttpStatus | FailureKind::StructuredHttpStatus => {
                    "Check the request against the server's validation rules"
                }
            },
            FitTrackError::IoError(_) => "Check that the config file exists and is readable",
            FitTrackError::ConfigError { .. } | FitTrackError::InvalidConfigValueError { .. } => {
                "Fix fittrack.toml or the command-line overrides"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, FitTrackError>;
