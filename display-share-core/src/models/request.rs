use serde::{Deserialize, Serialize};

use super::error::ShareError;

/// Category of capturable display surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplaySurface {
    Monitor,
    Window,
    Tab,
}

impl DisplaySurface {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monitor => "monitor",
            Self::Window => "window",
            Self::Tab => "tab",
        }
    }
}

/// The surface category the caller would prefer the picker to lead with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SurfaceHint {
    Any,
    Monitor,
    Window,
    Tab,
}

/// Whether whole-environment audio should be offered alongside a shared
/// monitor. Pre-existing knob; governs monitor surfaces only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SystemAudioPreference {
    Include,
    Exclude,
}

/// The caller's audio preference for when the user shares a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowAudioPreference {
    System,
    Window,
    Exclude,
    Unset,
}

/// Open, caller-facing capture request.
///
/// Enumerated fields are carried as strings so unknown values can be
/// rejected with a precise validation error at `normalize` time rather
/// than at deserialization time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DisplayRequest {
    pub video: bool,
    pub audio: bool,
    pub display_surface: Option<String>,
    pub system_audio: Option<String>,
    pub window_audio: Option<String>,
}

impl DisplayRequest {
    pub fn new(video: bool, audio: bool) -> Self {
        Self {
            video,
            audio,
            ..Default::default()
        }
    }

    pub fn with_display_surface(mut self, surface: &str) -> Self {
        self.display_surface = Some(surface.into());
        self
    }

    pub fn with_system_audio(mut self, preference: &str) -> Self {
        self.system_audio = Some(preference.into());
        self
    }

    pub fn with_window_audio(mut self, preference: &str) -> Self {
        self.window_audio = Some(preference.into());
        self
    }

    /// Parse a request arriving over a JSON boundary.
    pub fn from_json(json: &str) -> Result<Self, ShareError> {
        serde_json::from_str(json).map_err(|e| ShareError::MalformedRequest(e.to_string()))
    }

    /// Validate and canonicalize into an immutable `CaptureRequest`.
    ///
    /// Unrecognized enumerated values fail here, before any user
    /// interaction. Semantically inert combinations — an audio preference
    /// alongside `audio: false`, a monitor-only preference with a window
    /// hint — are retained as-is; the offer resolver makes them moot.
    pub fn normalize(&self) -> Result<CaptureRequest, ShareError> {
        let surface_hint = match self.display_surface.as_deref() {
            None | Some("any") => SurfaceHint::Any,
            Some("monitor") => SurfaceHint::Monitor,
            Some("window") => SurfaceHint::Window,
            Some("tab") => SurfaceHint::Tab,
            Some(other) => {
                return Err(ShareError::InvalidField {
                    field: "displaySurface",
                    value: other.into(),
                })
            }
        };

        let system_audio = match self.system_audio.as_deref() {
            None | Some("include") => SystemAudioPreference::Include,
            Some("exclude") => SystemAudioPreference::Exclude,
            Some(other) => {
                return Err(ShareError::InvalidField {
                    field: "systemAudio",
                    value: other.into(),
                })
            }
        };

        let window_audio = match self.window_audio.as_deref() {
            None => WindowAudioPreference::Unset,
            Some("system") => WindowAudioPreference::System,
            Some("window") => WindowAudioPreference::Window,
            Some("exclude") => WindowAudioPreference::Exclude,
            Some(other) => {
                return Err(ShareError::InvalidField {
                    field: "windowAudio",
                    value: other.into(),
                })
            }
        };

        Ok(CaptureRequest {
            video_requested: self.video,
            audio_requested: self.audio,
            surface_hint,
            system_audio,
            window_audio,
        })
    }
}

/// Immutable, canonical form of a capture request.
///
/// Created once per call and owned by the session; later changes to the
/// caller-held `DisplayRequest` cannot affect an in-flight session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureRequest {
    pub video_requested: bool,
    pub audio_requested: bool,
    pub surface_hint: SurfaceHint,
    pub system_audio: SystemAudioPreference,
    pub window_audio: WindowAudioPreference,
}
