//! Quantity and price-figure extraction from shopper messages.
//!
//! Number words ("duita", "তিনটা") are scanned before digits so that
//! "duita saree 500 takar moddhe" reads as quantity 2, not 500.

use once_cell::sync::Lazy;
use regex::Regex;

use stylist_config::Vocabulary;

/// Digit runs at or above this are noise (years, phone numbers, pincodes).
const MAX_DIGIT_QUANTITY: u32 = 50;

static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+").unwrap());

/// Pulls "how many" out of free-form Banglish text.
pub struct QuantityExtractor {
    /// Lowercased number words in vocabulary scan order.
    words: Vec<(String, u32)>,
}

impl QuantityExtractor {
    pub fn from_vocabulary(vocabulary: &Vocabulary) -> Self {
        let words = vocabulary
            .quantity_words
            .iter()
            .map(|entry| (entry.word.to_lowercase(), entry.value))
            .collect();
        Self { words }
    }

    /// How many units the shopper asked for, defaulting to 1.
    ///
    /// Number words win over digits. On the digit path only the first
    /// run counts, and values outside 1..=49 fall back to 1.
    pub fn extract_quantity(&self, text: &str) -> u32 {
        let lowered = text.to_lowercase();
        for (word, value) in &self.words {
            if contains_whole_word(&lowered, word) {
                return *value;
            }
        }
        let normalized = normalize_bengali_digits(&lowered);
        if let Some(run) = DIGIT_RUN.find(&normalized) {
            if let Ok(value) = run.as_str().parse::<u32>() {
                if value > 0 && value < MAX_DIGIT_QUANTITY {
                    return value;
                }
            }
        }
        1
    }
}

/// Largest number mentioned anywhere in the message, if any.
///
/// Used for budget ceilings ("sarees under 1500") where the biggest
/// figure is the spend limit and smaller ones are quantities.
pub fn extract_price_bound(text: &str) -> Option<u32> {
    let normalized = normalize_bengali_digits(text);
    DIGIT_RUN
        .find_iter(&normalized)
        .filter_map(|run| run.as_str().parse::<u32>().ok())
        .max()
}

/// Rewrites Bengali numerals (০-৯) as ASCII digits.
fn normalize_bengali_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '০'..='৯' => (b'0' + (c as u32 - '০' as u32) as u8) as char,
            _ => c,
        })
        .collect()
}

/// Substring match bounded by spaces or string edges on both sides.
///
/// Plain containment would make "phone" read as "one"; the quantity
/// table also relies on this so that "tin" never fires inside "tinta".
fn contains_whole_word(text: &str, word: &str) -> bool {
    if word.is_empty() {
        return false;
    }
    let mut search_from = 0;
    while let Some(offset) = text[search_from..].find(word) {
        let begin = search_from + offset;
        let end = begin + word.len();
        let left_bounded = begin == 0 || text[..begin].ends_with(' ');
        let right_bounded = end == text.len() || text[end..].starts_with(' ');
        if left_bounded && right_bounded {
            return true;
        }
        search_from = begin + word.chars().next().map_or(1, char::len_utf8);
    }
    false
}
