use serde::{Deserialize, Serialize};

use super::consent::SourceId;
use super::offer::AudioOfferKind;
use super::request::DisplaySurface;

/// Opaque track handle minted by the capture backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrackId(pub String);

impl TrackId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Handle to a live video track capturing the chosen surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoTrack {
    pub id: TrackId,
    pub surface: DisplaySurface,
    pub source: SourceId,
    pub label: String,
}

/// Handle to a live audio track of the kind the user selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioTrack {
    pub id: TrackId,
    pub kind: AudioOfferKind,
    pub source: SourceId,
    pub label: String,
}

/// Assembled output of a successful share session: at most one video track
/// and at most one audio track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultStream {
    pub video: Option<VideoTrack>,
    pub audio: Option<AudioTrack>,
}

impl ResultStream {
    pub fn has_video(&self) -> bool {
        self.video.is_some()
    }

    pub fn has_audio(&self) -> bool {
        self.audio.is_some()
    }

    pub fn summary(&self) -> StreamSummary {
        StreamSummary {
            surface: self.video.as_ref().map(|v| v.surface),
            has_video: self.video.is_some(),
            has_audio: self.audio.is_some(),
            audio_kind: self.audio.as_ref().map(|a| a.kind),
        }
    }
}

/// Compact description of an assembled stream, for delegate notifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamSummary {
    pub surface: Option<DisplaySurface>,
    pub has_video: bool,
    pub has_audio: bool,
    pub audio_kind: Option<AudioOfferKind>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video_track() -> VideoTrack {
        VideoTrack {
            id: TrackId("v-1".into()),
            surface: DisplaySurface::Window,
            source: SourceId::new("window-7"),
            label: "Editor".into(),
        }
    }

    fn audio_track() -> AudioTrack {
        AudioTrack {
            id: TrackId("a-1".into()),
            kind: AudioOfferKind::Window,
            source: SourceId::new("window-7"),
            label: "Editor audio".into(),
        }
    }

    #[test]
    fn summary_reflects_both_tracks() {
        let stream = ResultStream {
            video: Some(video_track()),
            audio: Some(audio_track()),
        };

        let summary = stream.summary();
        assert_eq!(summary.surface, Some(DisplaySurface::Window));
        assert!(summary.has_video);
        assert!(summary.has_audio);
        assert_eq!(summary.audio_kind, Some(AudioOfferKind::Window));
    }

    #[test]
    fn summary_of_video_only_stream() {
        let stream = ResultStream {
            video: Some(video_track()),
            audio: None,
        };

        let summary = stream.summary();
        assert!(summary.has_video);
        assert!(!summary.has_audio);
        assert_eq!(summary.audio_kind, None);
    }

    #[test]
    fn summary_of_audio_only_stream_has_no_surface() {
        let stream = ResultStream {
            video: None,
            audio: Some(audio_track()),
        };

        let summary = stream.summary();
        assert_eq!(summary.surface, None);
        assert!(summary.has_audio);
    }
}
