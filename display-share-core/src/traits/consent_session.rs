use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::models::consent::{ConsentOutcome, ConsentPrompt};
use crate::models::error::ShareError;

/// Cooperative cancellation flag observed inside `ConsentSession::present`.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Caller-side handle onto this token.
    pub fn handle(&self) -> CancelHandle {
        CancelHandle {
            cancelled: Arc::clone(&self.cancelled),
        }
    }
}

/// Clonable handle that cancels an in-flight consent session.
///
/// Safe to call from any thread, any number of times. Cancelling a session
/// that already reached a terminal outcome is a no-op.
#[derive(Debug, Clone)]
pub struct CancelHandle {
    cancelled: Arc<AtomicBool>,
}

impl CancelHandle {
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Interactive consent surface owned by the hosting environment.
///
/// `present` is the single suspension point in the share pipeline: it
/// blocks until the user responds, the session is cancelled, or the host's
/// own timeout rules fire.
///
/// The prompt's offers are advisory. `offered_kinds` seeds which audio
/// choices are emphasized and `default_kind` seeds the pre-highlighted one.
/// A host must never narrow the choices below what the platform would
/// otherwise allow, and must never force a choice the user did not make.
pub trait ConsentSession: Send + Sync {
    /// Present the prompt and suspend until a terminal outcome.
    ///
    /// Implementations must observe `cancel` while suspended and return
    /// `ConsentOutcome::Cancelled` promptly once it fires. The outcome is
    /// terminal and produced exactly once per call.
    fn present(
        &self,
        prompt: &ConsentPrompt,
        cancel: &CancelToken,
    ) -> Result<ConsentOutcome, ShareError>;
}
