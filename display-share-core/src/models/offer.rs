use serde::{Deserialize, Serialize};

/// Kind of audio a picker can offer alongside a shared surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AudioOfferKind {
    /// Audio mixed from the entire operating environment.
    #[serde(rename = "systemAudio")]
    System,
    /// Audio attributable to the application owning the selected source.
    #[serde(rename = "windowAudio")]
    Window,
}

/// The audio choices to offer for one candidate surface type, plus the
/// choice to pre-highlight.
///
/// Produced fresh per surface type and never mutated afterwards. The
/// constructors guarantee that a present default is always one of the
/// offered kinds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AudioOfferSet {
    #[serde(rename = "offeredKinds")]
    offered: Vec<AudioOfferKind>,
    #[serde(rename = "defaultKind")]
    default: Option<AudioOfferKind>,
}

impl AudioOfferSet {
    /// No audio choices at all.
    pub fn empty() -> Self {
        Self {
            offered: Vec::new(),
            default: None,
        }
    }

    /// A single offered kind, which is also the default.
    pub fn single(kind: AudioOfferKind) -> Self {
        Self {
            offered: vec![kind],
            default: Some(kind),
        }
    }

    /// Two offered kinds in presentation order; the first is the default.
    pub fn pair(default: AudioOfferKind, secondary: AudioOfferKind) -> Self {
        Self {
            offered: vec![default, secondary],
            default: Some(default),
        }
    }

    /// Offered kinds in presentation order.
    pub fn offered_kinds(&self) -> &[AudioOfferKind] {
        &self.offered
    }

    /// The kind to pre-highlight, if any audio is offered at all.
    pub fn default_kind(&self) -> Option<AudioOfferKind> {
        self.default
    }

    /// Whether `kind` is among the offered choices.
    pub fn offers(&self, kind: AudioOfferKind) -> bool {
        self.offered.contains(&kind)
    }

    pub fn is_empty(&self) -> bool {
        self.offered.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_offers_nothing() {
        let set = AudioOfferSet::empty();
        assert!(set.is_empty());
        assert_eq!(set.default_kind(), None);
        assert!(!set.offers(AudioOfferKind::System));
    }

    #[test]
    fn single_defaults_to_its_only_kind() {
        let set = AudioOfferSet::single(AudioOfferKind::Window);
        assert_eq!(set.offered_kinds(), &[AudioOfferKind::Window]);
        assert_eq!(set.default_kind(), Some(AudioOfferKind::Window));
    }

    #[test]
    fn pair_defaults_to_the_first_kind() {
        let set = AudioOfferSet::pair(AudioOfferKind::System, AudioOfferKind::Window);
        assert_eq!(
            set.offered_kinds(),
            &[AudioOfferKind::System, AudioOfferKind::Window]
        );
        assert_eq!(set.default_kind(), Some(AudioOfferKind::System));
        assert!(set.offers(AudioOfferKind::Window));
    }

    #[test]
    fn default_is_always_offered() {
        for set in [
            AudioOfferSet::empty(),
            AudioOfferSet::single(AudioOfferKind::System),
            AudioOfferSet::pair(AudioOfferKind::Window, AudioOfferKind::System),
        ] {
            if let Some(default) = set.default_kind() {
                assert!(set.offers(default));
            }
        }
    }

    #[test]
    fn serializes_with_wire_names() {
        let set = AudioOfferSet::pair(AudioOfferKind::Window, AudioOfferKind::System);
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(
            json,
            r#"{"offeredKinds":["windowAudio","systemAudio"],"defaultKind":"windowAudio"}"#
        );
    }
}
