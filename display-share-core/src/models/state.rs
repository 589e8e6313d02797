use super::error::ShareError;
use super::stream::StreamSummary;

/// Share session state machine.
///
/// State transitions:
/// ```text
/// pending → awaiting-consent → assembling → completed / failed
///                    ↓
///                  failed (cancelled, consent error)
/// ```
///
/// Sessions are one-shot: both terminal states are final and a terminal
/// session cannot be re-driven.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareState {
    Pending,
    AwaitingConsent,
    Assembling,
    Completed(StreamSummary),
    Failed(ShareError),
}

impl ShareState {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn is_awaiting_consent(&self) -> bool {
        matches!(self, Self::AwaitingConsent)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed(_) | Self::Failed(_))
    }
}
