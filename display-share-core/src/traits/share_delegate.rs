use crate::models::error::ShareError;
use crate::models::state::ShareState;
use crate::models::stream::StreamSummary;

/// Event delegate for share session notifications.
///
/// All methods are called from the thread driving the session, not the UI
/// thread. Implementations should marshal to the UI thread if needed.
pub trait ShareDelegate: Send + Sync {
    /// Called when the session state changes.
    fn on_state_changed(&self, state: &ShareState);

    /// Called once when the stream has been assembled.
    fn on_stream_ready(&self, summary: &StreamSummary);

    /// Called when the session fails, including user cancellation.
    fn on_error(&self, error: &ShareError);
}
