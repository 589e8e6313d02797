use thiserror::Error;

/// Errors surfaced by the display-share engine.
///
/// Preference hints are never a source of error: logically inert or
/// contradictory hint combinations are resolved by the offer decision
/// table, not rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShareError {
    #[error("invalid value for {field}: {value:?}")]
    InvalidField { field: &'static str, value: String },

    #[error("malformed request: {0}")]
    MalformedRequest(String),

    #[error("user cancelled")]
    UserCancelled,

    #[error("platform unavailable: {0}")]
    PlatformUnavailable(String),
}

impl ShareError {
    /// Validation failures occur before any user-visible interaction and
    /// are recoverable by fixing the request and retrying.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidField { .. } | Self::MalformedRequest(_))
    }

    /// Whether the session ended because the user dismissed the prompt.
    pub fn is_cancellation(&self) -> bool {
        matches!(self, Self::UserCancelled)
    }
}
