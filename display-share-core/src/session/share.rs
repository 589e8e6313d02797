use std::sync::Arc;

use parking_lot::Mutex;

use crate::models::consent::{ConsentOutcome, ConsentPrompt};
use crate::models::error::ShareError;
use crate::models::request::CaptureRequest;
use crate::models::state::ShareState;
use crate::models::stream::ResultStream;
use crate::resolve::surface_offers::SurfaceOffers;
use crate::session::assemble::assemble_stream;
use crate::traits::capture_backend::CaptureBackend;
use crate::traits::consent_session::{CancelHandle, CancelToken, ConsentSession};
use crate::traits::share_delegate::ShareDelegate;

/// One display-share invocation, from normalized request to assembled
/// stream.
///
/// Generic over the host's consent surface and capture backend. Each
/// session is an independent value; nothing is shared across concurrent
/// sessions, including sessions from the same caller.
///
/// Data flow:
/// ```text
/// CaptureRequest → [SurfaceOffers] → ConsentPrompt → consent.present(…)
///                                                           ↓
///                              ResultStream ← assemble_stream(choice)
/// ```
///
/// `run` consumes the session, so a terminal outcome is produced at most
/// once and a finished session cannot be re-driven.
pub struct ShareSession<C: ConsentSession, B: CaptureBackend> {
    session_id: String,
    requested_at: String,
    request: CaptureRequest,
    consent: C,
    backend: B,
    cancel: CancelToken,
    state: Arc<Mutex<ShareState>>,
    delegate: Option<Arc<dyn ShareDelegate>>,
}

impl<C: ConsentSession, B: CaptureBackend> ShareSession<C, B> {
    pub fn new(request: CaptureRequest, consent: C, backend: B) -> Self {
        Self {
            session_id: uuid::Uuid::new_v4().to_string(),
            requested_at: chrono::Utc::now().to_rfc3339(),
            request,
            consent,
            backend,
            cancel: CancelToken::new(),
            state: Arc::new(Mutex::new(ShareState::Pending)),
            delegate: None,
        }
    }

    pub fn set_delegate(&mut self, delegate: Arc<dyn ShareDelegate>) {
        self.delegate = Some(delegate);
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn request(&self) -> &CaptureRequest {
        &self.request
    }

    pub fn state(&self) -> ShareState {
        self.state.lock().clone()
    }

    /// Handle for cancelling this session from another thread.
    ///
    /// Cancellation is observed only inside the consent suspension point;
    /// cancelling is idempotent and a no-op once the session is terminal.
    pub fn cancel_handle(&self) -> CancelHandle {
        self.cancel.handle()
    }

    /// Drive the session to completion: present the consent prompt, then
    /// assemble the stream from the user's choice.
    pub fn run(self) -> Result<ResultStream, ShareError> {
        self.set_state(ShareState::AwaitingConsent);

        let offers = SurfaceOffers::resolve(&self.request);
        let prompt = ConsentPrompt {
            session_id: self.session_id.clone(),
            requested_at: self.requested_at.clone(),
            video_requested: self.request.video_requested,
            audio_requested: self.request.audio_requested,
            surface_hint: self.request.surface_hint,
            offers,
        };
        log::debug!("session {}: presenting consent prompt", self.session_id);

        // Single suspension point; the only place cancellation is observed.
        let outcome = match self.consent.present(&prompt, &self.cancel) {
            Ok(outcome) => outcome,
            Err(e) => {
                log::error!("session {}: consent surface failed: {}", self.session_id, e);
                return self.fail(e);
            }
        };

        let choice = match outcome {
            ConsentOutcome::Accepted(choice) => choice,
            ConsentOutcome::Cancelled => {
                log::warn!("session {}: cancelled by user", self.session_id);
                return self.fail(ShareError::UserCancelled);
            }
        };

        self.set_state(ShareState::Assembling);
        match assemble_stream(&self.request, &choice, &self.backend) {
            Ok(stream) => {
                let summary = stream.summary();
                log::info!(
                    "session {}: stream ready (video: {}, audio: {:?})",
                    self.session_id,
                    summary.has_video,
                    summary.audio_kind
                );
                self.set_state(ShareState::Completed(summary.clone()));
                if let Some(ref delegate) = self.delegate {
                    delegate.on_stream_ready(&summary);
                }
                Ok(stream)
            }
            Err(e) => {
                log::error!("session {}: assembly failed: {}", self.session_id, e);
                self.fail(e)
            }
        }
    }

    fn fail(&self, error: ShareError) -> Result<ResultStream, ShareError> {
        self.set_state(ShareState::Failed(error.clone()));
        if let Some(ref delegate) = self.delegate {
            delegate.on_error(&error);
        }
        Err(error)
    }

    fn set_state(&self, new_state: ShareState) {
        *self.state.lock() = new_state.clone();
        if let Some(ref delegate) = self.delegate {
            delegate.on_state_changed(&new_state);
        }
    }
}
