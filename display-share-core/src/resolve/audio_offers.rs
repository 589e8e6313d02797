//! Pure resolution of the audio choices a picker should offer.
//!
//! This is the engine's decision table. It is advisory only: the output
//! seeds which choices the picker emphasizes and which is pre-highlighted;
//! the user's final selection always wins.

use crate::models::offer::{AudioOfferKind, AudioOfferSet};
use crate::models::request::{DisplaySurface, SystemAudioPreference, WindowAudioPreference};

/// Compute the audio choices to offer for one candidate surface type.
///
/// Pure and deterministic: the result depends only on the four inputs, and
/// the function performs no capture, I/O, or shared-state mutation. It is
/// safe to call speculatively, once per candidate surface type, before the
/// user commits to any surface.
///
/// No audio requested offers nothing, for every surface type. Otherwise:
///
/// - **Window**: `Exclude` offers nothing. `Window` offers window audio
///   first (system audio remains available), highlighted. `System` offers
///   system audio first, highlighted. `Unset` mirrors the monitor-surface
///   preference: `Include` behaves like `System`, `Exclude` offers window
///   audio alone.
/// - **Monitor**: governed by `system_audio` alone; `Include` offers system
///   audio, `Exclude` offers nothing.
/// - **Tab**: tab audio is scoped to the tab's owning application and is
///   offered whenever audio is requested.
///
/// The window preference is never consulted for non-window surfaces: for
/// those the result is identical to the `Unset` case.
pub fn resolve(
    surface: DisplaySurface,
    audio_requested: bool,
    system_audio: SystemAudioPreference,
    window_audio: WindowAudioPreference,
) -> AudioOfferSet {
    if !audio_requested {
        return AudioOfferSet::empty();
    }

    match surface {
        DisplaySurface::Window => match window_audio {
            WindowAudioPreference::Exclude => AudioOfferSet::empty(),
            WindowAudioPreference::Window => {
                AudioOfferSet::pair(AudioOfferKind::Window, AudioOfferKind::System)
            }
            WindowAudioPreference::System => {
                AudioOfferSet::pair(AudioOfferKind::System, AudioOfferKind::Window)
            }
            WindowAudioPreference::Unset => match system_audio {
                SystemAudioPreference::Include => {
                    AudioOfferSet::pair(AudioOfferKind::System, AudioOfferKind::Window)
                }
                SystemAudioPreference::Exclude => AudioOfferSet::single(AudioOfferKind::Window),
            },
        },
        DisplaySurface::Monitor => match system_audio {
            SystemAudioPreference::Include => AudioOfferSet::single(AudioOfferKind::System),
            SystemAudioPreference::Exclude => AudioOfferSet::empty(),
        },
        DisplaySurface::Tab => AudioOfferSet::single(AudioOfferKind::Window),
    }
}
