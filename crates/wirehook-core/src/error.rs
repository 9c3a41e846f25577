//! Shared error type across wirehook crates.

use thiserror::Error;

/// Stable error codes (safe to log or surface to callers).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Round trip vetoed by the enforcer.
    Rejected,
    /// Malformed request or configuration.
    BadRequest,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Inner transport failure.
    Transport,
    /// Socket level I/O failure.
    Io,
    /// Internal error.
    Internal,
}

impl ErrorCode {
    /// String representation used in logs and JSON output.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::Rejected => "REJECTED",
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::Transport => "TRANSPORT",
            ErrorCode::Io => "IO",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, WireHookError>;

/// Unified error type used by core and net.
///
/// Misuse of the registration API (nil or repeated enforcer) is not represented
/// here: those are programming errors and panic at the call site.
#[derive(Debug, Error)]
pub enum WireHookError {
    #[error("rejected: {0}")]
    Rejected(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("transport: {0}")]
    Transport(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("internal: {0}")]
    Internal(String),
}

impl WireHookError {
    /// Map an error to its stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            WireHookError::Rejected(_) => ErrorCode::Rejected,
            WireHookError::BadRequest(_) => ErrorCode::BadRequest,
            WireHookError::UnsupportedVersion => ErrorCode::UnsupportedVersion,
            WireHookError::Transport(_) => ErrorCode::Transport,
            WireHookError::Io(_) => ErrorCode::Io,
            WireHookError::Internal(_) => ErrorCode::Internal,
        }
    }

    /// True for a policy veto (recoverable per request, never retried here).
    pub fn is_rejection(&self) -> bool {
        matches!(self, WireHookError::Rejected(_))
    }
}
