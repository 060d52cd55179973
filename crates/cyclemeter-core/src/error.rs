//! Shared error type across cyclemeter crates.

use thiserror::Error;

/// Stable error codes for hosts that report failures upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Config failed to parse or validate.
    InvalidConfig,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Filesystem failure.
    Io,
    /// Internal failure (e.g. a background task died).
    Internal,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidConfig => "INVALID_CONFIG",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::Io => "IO",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, CycleMeterError>;

/// Unified error type used by core and reporter.
#[derive(Debug, Error)]
pub enum CycleMeterError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("io: {0}")]
    Io(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl CycleMeterError {
    pub fn code(&self) -> ErrorCode {
        match self {
            CycleMeterError::InvalidConfig(_) => ErrorCode::InvalidConfig,
            CycleMeterError::UnsupportedVersion => ErrorCode::UnsupportedVersion,
            CycleMeterError::Io(_) => ErrorCode::Io,
            CycleMeterError::Internal(_) => ErrorCode::Internal,
        }
    }
}
