use std::fmt;

/// User-facing error taxonomy. Variants track where a failure came from;
/// every message is safe to render in an alert.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppError {
    /// Missing or unusable app configuration.
    Config(String),
    /// The provider could not be reached.
    Network(String),
    /// The request was aborted after the timeout.
    Timeout(String),
    /// The provider rejected the request.
    Http { status: u16, message: String },
    /// The response body could not be decoded.
    Parse(String),
    /// The request body could not be built.
    Serialization(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(message)
            | AppError::Network(message)
            | AppError::Timeout(message)
            | AppError::Parse(message)
            | AppError::Serialization(message)
            | AppError::Http { message, .. } => write!(formatter, "{message}"),
        }
    }
}

impl std::error::Error for AppError {}
