//! Keyword-driven message tagging: negation and attribute markers.

use stylist_config::Vocabulary;
use stylist_core::{Attribute, MessageTagger};

/// Tags messages by case-insensitive phrase containment.
///
/// Marker tables are curated so plain containment stays safe (no bare
/// "men", which sits inside "women"); the tagger itself does no word
/// splitting.
pub struct KeywordTagger {
    negation_phrases: Vec<String>,
    attribute_markers: Vec<(Attribute, Vec<String>)>,
}

impl KeywordTagger {
    pub fn from_vocabulary(vocabulary: &Vocabulary) -> Self {
        let negation_phrases = vocabulary
            .negation_phrases
            .iter()
            .map(|phrase| phrase.to_lowercase())
            .collect();
        let attribute_markers = Attribute::ALL
            .iter()
            .map(|&attribute| {
                let markers = vocabulary
                    .attribute_markers(attribute)
                    .iter()
                    .map(|marker| marker.to_lowercase())
                    .collect();
                (attribute, markers)
            })
            .collect();
        Self {
            negation_phrases,
            attribute_markers,
        }
    }
}

impl MessageTagger for KeywordTagger {
    fn detects_negation(&self, text: &str) -> bool {
        let lowered = text.to_lowercase();
        self.negation_phrases
            .iter()
            .any(|phrase| lowered.contains(phrase.as_str()))
    }

    fn has_attribute(&self, text: &str, attribute: Attribute) -> bool {
        let lowered = text.to_lowercase();
        self.attribute_markers
            .iter()
            .find(|(candidate, _)| *candidate == attribute)
            .is_some_and(|(_, markers)| {
                markers.iter().any(|marker| lowered.contains(marker.as_str()))
            })
    }
}
