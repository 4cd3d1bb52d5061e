//! Intent and attribute taxonomy for the stylist assistant
//!
//! The classifier produces a *set* of intents per message; the response
//! engine applies its own priority order on top. Keeping the enums here (and
//! not in the text-processing crate) lets the configuration layer key its
//! vocabulary tables by intent without a dependency cycle.

use serde::{Deserialize, Serialize};

/// Coarse user purpose detected by keyword containment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentKind {
    /// "I want / give me / order" vocabulary.
    Order,
    Greeting,
    /// "What should I wear" style questions.
    WhatToWear,
    /// "New / trending / latest" arrivals.
    NewArrival,
    Location,
    Hours,
    Contact,
    QuickDelivery,
    Premium,
    PriceLookup,
    /// Explicit "show / list" browse verb.
    ShowList,
    Popular,
    Budget,
    /// "Show me something else / different".
    SomethingElse,
}

impl IntentKind {
    /// Every intent, in a fixed order for iteration and logging.
    pub const ALL: [IntentKind; 14] = [
        IntentKind::Order,
        IntentKind::Greeting,
        IntentKind::WhatToWear,
        IntentKind::NewArrival,
        IntentKind::Location,
        IntentKind::Hours,
        IntentKind::Contact,
        IntentKind::QuickDelivery,
        IntentKind::Premium,
        IntentKind::PriceLookup,
        IntentKind::ShowList,
        IntentKind::Popular,
        IntentKind::Budget,
        IntentKind::SomethingElse,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IntentKind::Order => "order",
            IntentKind::Greeting => "greeting",
            IntentKind::WhatToWear => "what_to_wear",
            IntentKind::NewArrival => "new_arrival",
            IntentKind::Location => "location",
            IntentKind::Hours => "hours",
            IntentKind::Contact => "contact",
            IntentKind::QuickDelivery => "quick_delivery",
            IntentKind::Premium => "premium",
            IntentKind::PriceLookup => "price_lookup",
            IntentKind::ShowList => "show_list",
            IntentKind::Popular => "popular",
            IntentKind::Budget => "budget",
            IntentKind::SomethingElse => "something_else",
        }
    }
}

impl std::fmt::Display for IntentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category sub-intents; each resolves to a catalog category through the
/// configured name-mapping table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKind {
    Punjabi,
    Blouse,
    Saree,
    Custom,
    Occasion,
}

impl CategoryKind {
    pub const ALL: [CategoryKind; 5] = [
        CategoryKind::Punjabi,
        CategoryKind::Blouse,
        CategoryKind::Saree,
        CategoryKind::Custom,
        CategoryKind::Occasion,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryKind::Punjabi => "punjabi",
            CategoryKind::Blouse => "blouse",
            CategoryKind::Saree => "saree",
            CategoryKind::Custom => "custom",
            CategoryKind::Occasion => "occasion",
        }
    }
}

impl std::fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Message attributes detected by the lightweight tagger, used by the
/// attribute-filter response rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    /// Gender-targeted: menswear.
    Men,
    /// Gender-targeted: womenswear.
    Women,
    /// Silk material.
    Silk,
    /// Budget-conscious ("cheap", "kom dam", "shosta").
    Budget,
}

impl Attribute {
    pub const ALL: [Attribute; 4] = [
        Attribute::Men,
        Attribute::Women,
        Attribute::Silk,
        Attribute::Budget,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Attribute::Men => "men",
            Attribute::Women => "women",
            Attribute::Silk => "silk",
            Attribute::Budget => "budget",
        }
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Polarity-and-attribute tagging over free text. The default
/// implementation is keyword-driven; richer tokenizers can slot in behind
/// this without touching rule logic.
pub trait MessageTagger: Send + Sync {
    /// True when the message carries negative polarity toward ordering
    /// ("cancel", "chai na", "বাতিল").
    fn detects_negation(&self, text: &str) -> bool;

    /// True when the message carries the given attribute.
    fn has_attribute(&self, text: &str, attribute: Attribute) -> bool;
}
