//! Consent session driven by a preset script.
//!
//! Stands in for an interactive picker in automated environments. The
//! script plays the user's role: it picks a surface, answers the audio
//! question, or dismisses the prompt. Like a real picker, it presents
//! exactly the offered kinds and never invents a choice the prompt did
//! not carry.

use std::thread;
use std::time::Duration;

use display_share_core::models::consent::{
    ConsentOutcome, ConsentPrompt, SourceId, SurfaceChoice,
};
use display_share_core::models::error::ShareError;
use display_share_core::models::offer::AudioOfferKind;
use display_share_core::models::request::{DisplaySurface, SurfaceHint};
use display_share_core::traits::consent_session::{CancelToken, ConsentSession};

/// How the scripted user answers the audio question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioPick {
    /// Take whatever choice the prompt pre-highlights.
    Default,
    /// Pick this kind explicitly.
    Kind(AudioOfferKind),
    /// Decline audio even if offered.
    None,
}

/// Preset answer for a consent prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsentScript {
    Accept {
        /// Surface to pick; `None` follows the prompt's hint, falling back
        /// to a monitor when the hint is `Any`.
        surface: Option<DisplaySurface>,
        source: SourceId,
        audio: AudioPick,
    },
    /// Dismiss the prompt without sharing anything.
    Dismiss,
}

/// `ConsentSession` implementation that answers from a preset script.
pub struct ScriptedConsent {
    script: ConsentScript,
    response_delay: Duration,
}

impl ScriptedConsent {
    pub fn new(script: ConsentScript) -> Self {
        Self {
            script,
            response_delay: Duration::ZERO,
        }
    }

    /// Simulate user think time before answering.
    ///
    /// The delay is polled against the cancel token in small steps, so a
    /// cancelled session comes back promptly instead of sleeping out the
    /// full delay.
    pub fn with_response_delay(mut self, delay: Duration) -> Self {
        self.response_delay = delay;
        self
    }

    /// Returns false if cancellation fired before the user "answered".
    fn wait_for_user(&self, cancel: &CancelToken) -> bool {
        const STEP: Duration = Duration::from_millis(10);

        let mut remaining = self.response_delay;
        while !remaining.is_zero() {
            if cancel.is_cancelled() {
                return false;
            }
            let step = STEP.min(remaining);
            thread::sleep(step);
            remaining -= step;
        }
        !cancel.is_cancelled()
    }
}

impl ConsentSession for ScriptedConsent {
    fn present(
        &self,
        prompt: &ConsentPrompt,
        cancel: &CancelToken,
    ) -> Result<ConsentOutcome, ShareError> {
        if !self.wait_for_user(cancel) {
            return Ok(ConsentOutcome::Cancelled);
        }

        let (surface, source, pick) = match &self.script {
            ConsentScript::Dismiss => return Ok(ConsentOutcome::Cancelled),
            ConsentScript::Accept {
                surface,
                source,
                audio,
            } => {
                let surface = (*surface).unwrap_or(match prompt.surface_hint {
                    SurfaceHint::Any | SurfaceHint::Monitor => DisplaySurface::Monitor,
                    SurfaceHint::Window => DisplaySurface::Window,
                    SurfaceHint::Tab => DisplaySurface::Tab,
                });
                (surface, source.clone(), *audio)
            }
        };

        let offer = prompt.offers.get(surface);
        let audio = match pick {
            AudioPick::None => None,
            AudioPick::Default => offer.default_kind(),
            AudioPick::Kind(kind) => {
                if offer.offers(kind) {
                    Some(kind)
                } else {
                    log::warn!(
                        "scripted pick {:?} is not offered for {} surface; sharing without audio",
                        kind,
                        surface.as_str()
                    );
                    None
                }
            }
        };

        Ok(ConsentOutcome::Accepted(SurfaceChoice {
            surface,
            source,
            audio,
        }))
    }
}
