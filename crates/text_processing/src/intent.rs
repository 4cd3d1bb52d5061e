//! Keyword-containment intent classification
//!
//! A message may satisfy several intents at once; the response engine
//! applies its own priority order on top of the returned set. Matching is
//! case-insensitive substring containment with no stemming. False positives
//! on substrings are an accepted trade: messages are short and a wrong
//! local answer just falls through to the fallback engine on rephrase.

use std::collections::HashSet;

use stylist_config::Vocabulary;
use stylist_core::{CategoryKind, IntentKind};

/// Classifies free text against the configured trigger vocabularies.
pub struct IntentClassifier {
    intent_triggers: Vec<(IntentKind, Vec<String>)>,
    category_triggers: Vec<(CategoryKind, Vec<String>)>,
}

impl IntentClassifier {
    /// Precompute lowercase trigger tables from the vocabulary.
    pub fn from_vocabulary(vocabulary: &Vocabulary) -> Self {
        let lower = |phrases: &[String]| -> Vec<String> {
            phrases.iter().map(|p| p.to_lowercase()).collect()
        };
        Self {
            intent_triggers: IntentKind::ALL
                .iter()
                .map(|&intent| (intent, lower(vocabulary.intent_triggers(intent))))
                .collect(),
            category_triggers: CategoryKind::ALL
                .iter()
                .map(|&category| (category, lower(vocabulary.category_triggers(category))))
                .collect(),
        }
    }

    /// Every intent whose vocabulary appears in the message.
    pub fn classify(&self, text: &str) -> HashSet<IntentKind> {
        let lower = text.to_lowercase();
        let detected: HashSet<IntentKind> = self
            .intent_triggers
            .iter()
            .filter(|(_, triggers)| contains_any(&lower, triggers))
            .map(|(intent, _)| *intent)
            .collect();
        if !detected.is_empty() {
            tracing::debug!(intents = ?detected, "classified message");
        }
        detected
    }

    pub fn has_intent(&self, text: &str, intent: IntentKind) -> bool {
        let lower = text.to_lowercase();
        self.intent_triggers
            .iter()
            .find(|(kind, _)| *kind == intent)
            .map(|(_, triggers)| contains_any(&lower, triggers))
            .unwrap_or(false)
    }

    /// Category sub-intents present in the message, in fixed enum order.
    pub fn detect_categories(&self, text: &str) -> Vec<CategoryKind> {
        let lower = text.to_lowercase();
        self.category_triggers
            .iter()
            .filter(|(_, triggers)| contains_any(&lower, triggers))
            .map(|(category, _)| *category)
            .collect()
    }

    pub fn first_category(&self, text: &str) -> Option<CategoryKind> {
        self.detect_categories(text).into_iter().next()
    }
}

fn contains_any(text: &str, triggers: &[String]) -> bool {
    triggers.iter().any(|trigger| text.contains(trigger.as_str()))
}
