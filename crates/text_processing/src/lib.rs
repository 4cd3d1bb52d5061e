//! Text understanding for the stylist assistant.
//!
//! Deterministic keyword and edit-distance work over mixed English,
//! Bengali, and Banglish shopper messages:
//! - **Intent classification**: case-insensitive containment against vocabulary tables
//! - **Product matching**: windowed edit-distance lookup over catalog names
//! - **Quantity / price extraction**: number words first, digit runs second
//! - **Tagging**: negation and attribute markers for the ordering rules
//! - **Language detection**: script-share heuristic for picking the reply language

pub mod fuzzy;
pub mod intent;
pub mod language;
pub mod quantity;
pub mod tagger;

pub use fuzzy::{MatcherConfig, ProductMatcher};
pub use intent::IntentClassifier;
pub use language::detect_reply_language;
pub use quantity::{extract_price_bound, QuantityExtractor};
pub use tagger::KeywordTagger;
