use serde::{Deserialize, Serialize};

use super::error::ShareError;
use super::offer::AudioOfferKind;
use super::request::{DisplaySurface, SurfaceHint};
use crate::resolve::surface_offers::SurfaceOffers;

/// Opaque identifier of a concrete capturable source — a specific window,
/// monitor, or tab. Minted and interpreted by the host; the engine threads
/// it through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceId(String);

impl SourceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Everything a host picker needs to present a share prompt.
///
/// Offers are advisory: they seed which audio choices the picker
/// emphasizes and which one is pre-highlighted. They never remove a choice
/// the platform would otherwise allow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsentPrompt {
    pub session_id: String,
    pub requested_at: String,
    pub video_requested: bool,
    pub audio_requested: bool,
    pub surface_hint: SurfaceHint,
    pub offers: SurfaceOffers,
}

impl ConsentPrompt {
    /// JSON form for picker UIs running out of process.
    pub fn to_json(&self) -> Result<String, ShareError> {
        serde_json::to_string(self)
            .map_err(|e| ShareError::MalformedRequest(format!("failed to serialize prompt: {}", e)))
    }
}

/// The user's affirmative selection from the picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceChoice {
    pub surface: DisplaySurface,
    pub source: SourceId,
    /// The user's final say on audio. Not validated against the offer set:
    /// binding authority rests with the consent surface, which may offer
    /// more than the hint seeded.
    pub audio: Option<AudioOfferKind>,
}

/// Terminal result of a consent session, produced exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum ConsentOutcome {
    Accepted(SurfaceChoice),
    Cancelled,
}

impl ConsentOutcome {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}
