//! Capture backend that mints synthetic track handles.
//!
//! Stands in for a real capture pipeline in automated environments. Tracks
//! carry uuid handles and human-readable labels; a shared ledger accounts
//! every open and release so harnesses can assert that no track outlives a
//! failed or cancelled session.

use std::sync::Arc;

use parking_lot::Mutex;

use display_share_core::models::consent::SourceId;
use display_share_core::models::error::ShareError;
use display_share_core::models::offer::AudioOfferKind;
use display_share_core::models::request::DisplaySurface;
use display_share_core::models::stream::{AudioTrack, TrackId, VideoTrack};
use display_share_core::traits::capture_backend::CaptureBackend;

/// Accounting of tracks a `SyntheticBackend` has minted and released.
#[derive(Default)]
pub struct TrackLedger {
    inner: Mutex<LedgerInner>,
}

#[derive(Default)]
struct LedgerInner {
    live: Vec<String>,
    released: Vec<String>,
    total_opened: u64,
}

impl TrackLedger {
    /// Tracks currently open.
    pub fn open_count(&self) -> usize {
        self.inner.lock().live.len()
    }

    /// Tracks ever opened, released or not.
    pub fn total_opened(&self) -> u64 {
        self.inner.lock().total_opened
    }

    pub fn was_released(&self, id: &TrackId) -> bool {
        self.inner.lock().released.iter().any(|r| r == id.as_str())
    }

    fn record_open(&self, id: &str) {
        let mut inner = self.inner.lock();
        inner.live.push(id.to_string());
        inner.total_opened += 1;
    }

    fn record_release(&self, id: &str) {
        let mut inner = self.inner.lock();
        if let Some(pos) = inner.live.iter().position(|t| t == id) {
            inner.live.remove(pos);
            inner.released.push(id.to_string());
        }
    }
}

/// Synthetic `CaptureBackend` for automated environments.
///
/// `fail_video_for` / `fail_audio_for` inject `PlatformUnavailable`
/// failures for specific surfaces or audio kinds, which is how harnesses
/// exercise the partial-assembly release paths.
#[derive(Default)]
pub struct SyntheticBackend {
    ledger: Arc<TrackLedger>,
    fail_video: Mutex<Vec<DisplaySurface>>,
    fail_audio: Mutex<Vec<AudioOfferKind>>,
}

impl SyntheticBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ledger shared with this backend; keep it across the session
    /// boundary to assert release behavior after the session is consumed.
    pub fn ledger(&self) -> Arc<TrackLedger> {
        Arc::clone(&self.ledger)
    }

    /// Make subsequent video opens for `surface` fail.
    pub fn fail_video_for(&self, surface: DisplaySurface) {
        self.fail_video.lock().push(surface);
    }

    /// Make subsequent audio opens of `kind` fail.
    pub fn fail_audio_for(&self, kind: AudioOfferKind) {
        self.fail_audio.lock().push(kind);
    }
}

impl CaptureBackend for SyntheticBackend {
    fn open_video_track(
        &self,
        surface: DisplaySurface,
        source: &SourceId,
    ) -> Result<VideoTrack, ShareError> {
        if self.fail_video.lock().contains(&surface) {
            return Err(ShareError::PlatformUnavailable(format!(
                "no video pipeline for {} surface",
                surface.as_str()
            )));
        }

        let id = uuid::Uuid::new_v4().to_string();
        self.ledger.record_open(&id);
        log::debug!("opened synthetic video track {} for {}", id, source.as_str());

        Ok(VideoTrack {
            id: TrackId(id),
            surface,
            source: source.clone(),
            label: format!("Synthetic {} video ({})", surface.as_str(), source.as_str()),
        })
    }

    fn open_audio_track(
        &self,
        kind: AudioOfferKind,
        source: &SourceId,
    ) -> Result<AudioTrack, ShareError> {
        if self.fail_audio.lock().contains(&kind) {
            return Err(ShareError::PlatformUnavailable(format!(
                "no {:?} audio pipeline",
                kind
            )));
        }

        let id = uuid::Uuid::new_v4().to_string();
        self.ledger.record_open(&id);
        log::debug!("opened synthetic audio track {} for {}", id, source.as_str());

        Ok(AudioTrack {
            id: TrackId(id),
            kind,
            source: source.clone(),
            label: match kind {
                AudioOfferKind::System => "Synthetic system audio".into(),
                AudioOfferKind::Window => format!("Synthetic source audio ({})", source.as_str()),
            },
        })
    }

    fn release_track(&self, id: &TrackId) {
        self.ledger.record_release(id.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> SourceId {
        SourceId::new("monitor-0")
    }

    #[test]
    fn mints_and_accounts_tracks() {
        let backend = SyntheticBackend::new();
        let ledger = backend.ledger();

        let video = backend
            .open_video_track(DisplaySurface::Monitor, &source())
            .unwrap();
        let audio = backend
            .open_audio_track(AudioOfferKind::System, &source())
            .unwrap();

        assert_ne!(video.id, audio.id);
        assert_eq!(ledger.open_count(), 2);
        assert_eq!(ledger.total_opened(), 2);
    }

    #[test]
    fn release_is_idempotent() {
        let backend = SyntheticBackend::new();
        let ledger = backend.ledger();

        let video = backend
            .open_video_track(DisplaySurface::Window, &source())
            .unwrap();

        backend.release_track(&video.id);
        backend.release_track(&video.id);
        backend.release_track(&TrackId("never-opened".into()));

        assert_eq!(ledger.open_count(), 0);
        assert!(ledger.was_released(&video.id));
        assert!(!ledger.was_released(&TrackId("never-opened".into())));
    }

    #[test]
    fn injected_video_failure() {
        let backend = SyntheticBackend::new();
        backend.fail_video_for(DisplaySurface::Tab);

        let err = backend
            .open_video_track(DisplaySurface::Tab, &source())
            .unwrap_err();
        assert!(matches!(err, ShareError::PlatformUnavailable(_)));

        // Other surfaces are unaffected.
        assert!(backend
            .open_video_track(DisplaySurface::Monitor, &source())
            .is_ok());
    }

    #[test]
    fn injected_audio_failure() {
        let backend = SyntheticBackend::new();
        backend.fail_audio_for(AudioOfferKind::Window);

        assert!(backend
            .open_audio_track(AudioOfferKind::Window, &source())
            .is_err());
        assert!(backend
            .open_audio_track(AudioOfferKind::System, &source())
            .is_ok());
        assert_eq!(backend.ledger().open_count(), 1);
    }
}
