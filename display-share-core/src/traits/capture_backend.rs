use crate::models::consent::SourceId;
use crate::models::error::ShareError;
use crate::models::offer::AudioOfferKind;
use crate::models::request::DisplaySurface;
use crate::models::stream::{AudioTrack, TrackId, VideoTrack};

/// Narrow contract to the host's low-level capture pipelines.
///
/// The engine never captures anything itself; it only asks the backend for
/// track handles after the user has consented. A backend that cannot
/// satisfy a surface/audio combination fails with
/// `ShareError::PlatformUnavailable`.
pub trait CaptureBackend: Send + Sync {
    /// Open a video track capturing the given source.
    fn open_video_track(
        &self,
        surface: DisplaySurface,
        source: &SourceId,
    ) -> Result<VideoTrack, ShareError>;

    /// Open an audio track of the given kind, scoped to `source` for
    /// window- and tab-scoped audio.
    fn open_audio_track(
        &self,
        kind: AudioOfferKind,
        source: &SourceId,
    ) -> Result<AudioTrack, ShareError>;

    /// Release a previously opened track.
    ///
    /// Must be idempotent: releasing an unknown or already-released id is
    /// a no-op.
    fn release_track(&self, id: &TrackId);
}
