use serde::Serialize;

use super::audio_offers;
use crate::models::offer::AudioOfferSet;
use crate::models::request::{CaptureRequest, DisplaySurface};

/// Audio offers computed speculatively for every candidate surface type.
///
/// The picker shows all surface categories at once, so the offer set for
/// each is resolved up front, before the user commits to any of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SurfaceOffers {
    pub monitor: AudioOfferSet,
    pub window: AudioOfferSet,
    pub tab: AudioOfferSet,
}

impl SurfaceOffers {
    /// Resolve the offer set for each candidate surface type of `request`.
    pub fn resolve(request: &CaptureRequest) -> Self {
        let resolve_for = |surface| {
            audio_offers::resolve(
                surface,
                request.audio_requested,
                request.system_audio,
                request.window_audio,
            )
        };

        Self {
            monitor: resolve_for(DisplaySurface::Monitor),
            window: resolve_for(DisplaySurface::Window),
            tab: resolve_for(DisplaySurface::Tab),
        }
    }

    /// The offer set for one surface type.
    pub fn get(&self, surface: DisplaySurface) -> &AudioOfferSet {
        match surface {
            DisplaySurface::Monitor => &self.monitor,
            DisplaySurface::Window => &self.window,
            DisplaySurface::Tab => &self.tab,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::offer::AudioOfferKind;
    use crate::models::request::{SurfaceHint, SystemAudioPreference, WindowAudioPreference};

    fn request(
        audio: bool,
        system_audio: SystemAudioPreference,
        window_audio: WindowAudioPreference,
    ) -> CaptureRequest {
        CaptureRequest {
            video_requested: true,
            audio_requested: audio,
            surface_hint: SurfaceHint::Any,
            system_audio,
            window_audio,
        }
    }

    #[test]
    fn resolves_each_surface_independently() {
        let offers = SurfaceOffers::resolve(&request(
            true,
            SystemAudioPreference::Include,
            WindowAudioPreference::Exclude,
        ));

        // The window preference silences the window surface only.
        assert!(offers.window.is_empty());
        assert_eq!(offers.monitor.default_kind(), Some(AudioOfferKind::System));
        assert_eq!(offers.tab.default_kind(), Some(AudioOfferKind::Window));
    }

    #[test]
    fn no_audio_empties_every_surface() {
        let offers = SurfaceOffers::resolve(&request(
            false,
            SystemAudioPreference::Include,
            WindowAudioPreference::Window,
        ));

        assert!(offers.monitor.is_empty());
        assert!(offers.window.is_empty());
        assert!(offers.tab.is_empty());
    }

    #[test]
    fn get_returns_the_matching_set() {
        let offers = SurfaceOffers::resolve(&request(
            true,
            SystemAudioPreference::Exclude,
            WindowAudioPreference::Unset,
        ));

        assert_eq!(offers.get(DisplaySurface::Monitor), &offers.monitor);
        assert_eq!(offers.get(DisplaySurface::Window), &offers.window);
        assert_eq!(offers.get(DisplaySurface::Tab), &offers.tab);
    }
}
