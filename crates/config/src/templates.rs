//! Canned reply templates for the local response rules
//!
//! Templates use {placeholders}: {store}, {item}, {quantity}, {price},
//! {original}, {discount}, {category}. Only the apology is fully localized;
//! the other replies are written in the Banglish register the store's
//! customers actually chat in, which reads fine in both languages.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use stylist_core::ReplyLanguage;

#[derive(Error, Debug)]
pub enum TemplatesError {
    #[error("Failed to read templates file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse templates file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// A text with an English and a Bengali rendering, falling back to English.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LocalizedText {
    #[serde(default)]
    pub en: String,
    #[serde(default)]
    pub bn: String,
}

impl LocalizedText {
    pub fn get(&self, language: ReplyLanguage) -> &str {
        match language {
            ReplyLanguage::Bengali if !self.bn.is_empty() => &self.bn,
            _ => &self.en,
        }
    }
}

/// Substitute {placeholders} in a template string.
pub fn render(template: &str, substitutions: &[(&str, String)]) -> String {
    let mut result = template.to_string();
    for (key, value) in substitutions {
        result = result.replace(&format!("{{{}}}", key), value);
    }
    result
}

fn default_greeting() -> String {
    "Welcome to {store}! 🙏 Ami apnar personal stylist. Punjabi, blouse, saree - ki khujchen bolun!"
        .to_string()
}

fn default_item_added() -> String {
    "{quantity} x {item} apnar order e add korlam! 🛒 Aro kichu lagbe?".to_string()
}

fn default_what_to_wear() -> String {
    "Ei looks gulo apnar jonno bece rakhlam - dekhe nin:".to_string()
}

fn default_attribute_filtered() -> String {
    "Apnar pochondo mathay rekhe ei collection ta sajiyechi:".to_string()
}

fn default_new_arrivals() -> String {
    "Ekdom notun collection, sobe rack e uthlo:".to_string()
}

fn default_quick_delivery() -> String {
    "Ei items gulo sobcheye taratari deliver hoy:".to_string()
}

fn default_premium() -> String {
    "Amader premium collection, special occasion er jonno:".to_string()
}

fn default_price_single() -> String {
    "{item} er dam {price}.".to_string()
}

fn default_price_discounted() -> String {
    "{item} er dam {price} - {discount}% off! Age chilo {original}.".to_string()
}

fn default_category_listing() -> String {
    "{category} collection dekhe nin:".to_string()
}

fn default_popular() -> String {
    "Sobcheye popular items, customers der favourite:".to_string()
}

fn default_budget() -> String {
    "{price} er moddhe darun options:".to_string()
}

fn default_bare_product() -> String {
    "{item} - dam {price}. Darun choice!".to_string()
}

fn default_something_else() -> String {
    "Accha, onno kichu dekhai:".to_string()
}

fn default_apology() -> LocalizedText {
    LocalizedText {
        en: "Sorry, I'm having a little trouble right now. Please try again in a moment 🙏"
            .to_string(),
        bn: "দুঃখিত, এখন একটু সমস্যা হচ্ছে। একটু পরে আবার চেষ্টা করুন 🙏".to_string(),
    }
}

/// One canned template per local response rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplyTemplates {
    #[serde(default = "default_greeting")]
    pub greeting: String,
    #[serde(default = "default_item_added")]
    pub item_added: String,
    #[serde(default = "default_what_to_wear")]
    pub what_to_wear: String,
    #[serde(default = "default_attribute_filtered")]
    pub attribute_filtered: String,
    #[serde(default = "default_new_arrivals")]
    pub new_arrivals: String,
    #[serde(default = "default_quick_delivery")]
    pub quick_delivery: String,
    #[serde(default = "default_premium")]
    pub premium: String,
    #[serde(default = "default_price_single")]
    pub price_single: String,
    #[serde(default = "default_price_discounted")]
    pub price_discounted: String,
    #[serde(default = "default_category_listing")]
    pub category_listing: String,
    #[serde(default = "default_popular")]
    pub popular: String,
    #[serde(default = "default_budget")]
    pub budget: String,
    #[serde(default = "default_bare_product")]
    pub bare_product: String,
    #[serde(default = "default_something_else")]
    pub something_else: String,
    /// Degraded reply when the fallback engine fails; localized.
    #[serde(default = "default_apology")]
    pub apology: LocalizedText,
}

impl Default for ReplyTemplates {
    fn default() -> Self {
        Self {
            greeting: default_greeting(),
            item_added: default_item_added(),
            what_to_wear: default_what_to_wear(),
            attribute_filtered: default_attribute_filtered(),
            new_arrivals: default_new_arrivals(),
            quick_delivery: default_quick_delivery(),
            premium: default_premium(),
            price_single: default_price_single(),
            price_discounted: default_price_discounted(),
            category_listing: default_category_listing(),
            popular: default_popular(),
            budget: default_budget(),
            bare_product: default_bare_product(),
            something_else: default_something_else(),
            apology: default_apology(),
        }
    }
}

impl ReplyTemplates {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, TemplatesError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_substitutes_placeholders() {
        let text = render(
            "{quantity} x {item} added",
            &[
                ("quantity", "2".to_string()),
                ("item", "Red Katan Blouse".to_string()),
            ],
        );
        assert_eq!(text, "2 x Red Katan Blouse added");
    }

    #[test]
    fn test_apology_localization_falls_back_to_english() {
        let templates = ReplyTemplates::default();
        assert!(templates
            .apology
            .get(ReplyLanguage::Bengali)
            .contains("দুঃখিত"));

        let english_only = LocalizedText {
            en: "sorry".to_string(),
            bn: String::new(),
        };
        assert_eq!(english_only.get(ReplyLanguage::Bengali), "sorry");
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let templates: ReplyTemplates =
            serde_yaml::from_str("greeting: \"Hello from {store}\"\n").unwrap();
        assert_eq!(templates.greeting, "Hello from {store}");
        assert!(templates.item_added.contains("{item}"));
        assert!(!templates.apology.en.is_empty());
    }
}
