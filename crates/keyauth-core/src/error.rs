//! Shared error type across keyauth crates.

use thiserror::Error;

/// Stable error codes (used in logs and tests).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Config file could not be parsed or failed validation.
    InvalidConfig,
    /// Unsupported config schema version.
    UnsupportedVersion,
    /// No usable keys where at least one is required.
    Misconfigured,
    /// I/O or runtime failure.
    Internal,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidConfig => "INVALID_CONFIG",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::Misconfigured => "MISCONFIGURED",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, KeyAuthError>;

/// Unified error type for fallible startup paths.
///
/// Request-time outcomes are never errors; they are [`crate::Verdict`]s.
#[derive(Debug, Error)]
pub enum KeyAuthError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("unsupported config version: {0}")]
    UnsupportedVersion(u32),
    #[error("service misconfigured: {0}")]
    Misconfigured(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl KeyAuthError {
    pub fn code(&self) -> ErrorCode {
        match self {
            KeyAuthError::InvalidConfig(_) => ErrorCode::InvalidConfig,
            KeyAuthError::UnsupportedVersion(_) => ErrorCode::UnsupportedVersion,
            KeyAuthError::Misconfigured(_) => ErrorCode::Misconfigured,
            KeyAuthError::Internal(_) => ErrorCode::Internal,
        }
    }
}
