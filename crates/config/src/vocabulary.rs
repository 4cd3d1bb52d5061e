//! Trigger vocabularies for intent, category, attribute, and quantity parsing
//!
//! Every table mixes English, Bengali script, and Banglish transliterations.
//! Matching is deliberately crude substring containment (whole-word for
//! quantity words), so the lists below are curated against known substring
//! traps: e.g. "women's" contains "men's", "sat"/"at" are common English
//! words, and bare "noy" is also the Bengali negative copula. Edit with care.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use stylist_core::{Attribute, CategoryKind, IntentKind};

#[derive(Error, Debug)]
pub enum VocabularyError {
    #[error("Failed to read vocabulary file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse vocabulary file: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("Missing vocabulary for {what}")]
    Missing { what: String },
    #[error("Empty vocabulary list for {what}")]
    Empty { what: String },
    #[error("Quantity word '{word}' maps to out-of-range value {value}")]
    QuantityOutOfRange { word: String, value: u32 },
}

/// A number word and the quantity it denotes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityWord {
    pub word: String,
    pub value: u32,
}

/// All keyword tables, loaded once and shared read-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vocabulary {
    /// Intent -> trigger phrases (substring containment, case-insensitive).
    pub intent_triggers: HashMap<IntentKind, Vec<String>>,
    /// Category sub-intent -> trigger phrases.
    pub category_triggers: HashMap<CategoryKind, Vec<String>>,
    /// Category sub-intent -> catalog category name.
    pub category_names: HashMap<CategoryKind, String>,
    /// Attribute -> marker phrases for the tagger.
    pub attribute_markers: HashMap<Attribute, Vec<String>>,
    /// Negative-polarity phrases that suppress the ordering rule.
    pub negation_phrases: Vec<String>,
    /// Number words in fixed scan order; first whole-word match wins.
    pub quantity_words: Vec<QuantityWord>,
}

fn phrases(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn default_intent_triggers() -> HashMap<IntentKind, Vec<String>> {
    let mut map = HashMap::new();
    map.insert(
        IntentKind::Order,
        phrases(&[
            "dao", "দাও", "chai", "চাই", "kinbo", "কিনবো", "nebo", "nibo", "নেবো", "lagbe",
            "লাগবে", "order", "i want", "give me", "buy", "add to cart", "dorkar", "দরকার",
        ]),
    );
    map.insert(
        IntentKind::Greeting,
        phrases(&[
            "hi",
            "hello",
            "hey",
            "hlw",
            "namaskar",
            "নমস্কার",
            "salam",
            "assalamu",
            "kemon achen",
            "kemon acho",
            "কেমন আছেন",
            "good morning",
            "good evening",
        ]),
    );
    map.insert(
        IntentKind::WhatToWear,
        phrases(&[
            "what to wear",
            "what should i wear",
            "ki porbo",
            "কি পরবো",
            "ki pore",
            "kon jama",
            "কোন জামা",
            "outfit suggest",
            "suggest koro",
        ]),
    );
    map.insert(
        IntentKind::NewArrival,
        phrases(&["new", "notun", "নতুন", "latest", "trending", "new arrival"]),
    );
    map.insert(
        IntentKind::Location,
        phrases(&[
            "location",
            "address",
            "kothay",
            "কোথায়",
            "thikana",
            "ঠিকানা",
            "where is",
            "where are you",
            "map",
        ]),
    );
    map.insert(
        IntentKind::Hours,
        phrases(&[
            "hours", "khola", "খোলা", "bondho", "বন্ধ", "kokhon", "কখন", "timing", "what time",
            "open", "close", "kotokkhon",
        ]),
    );
    map.insert(
        IntentKind::Contact,
        phrases(&[
            "contact", "phone", "number", "whatsapp", "call", "jogajog", "যোগাযোগ", "mobile",
            "email", "helpline",
        ]),
    );
    map.insert(
        IntentKind::QuickDelivery,
        phrases(&[
            "quick",
            "urgent",
            "taratari",
            "তাড়াতাড়ি",
            "joldi",
            "জলদি",
            "express",
            "emergency",
            "fast delivery",
            "same day",
        ]),
    );
    map.insert(
        IntentKind::Premium,
        phrases(&[
            "premium",
            "luxury",
            "dami",
            "দামি",
            "expensive",
            "exclusive",
            "high end",
            "best quality",
        ]),
    );
    map.insert(
        IntentKind::PriceLookup,
        phrases(&[
            "dam", "দাম", "price", "koto", "কত", "₹", "taka", "টাকা", "cost", "rate", "mullo",
            "মূল্য", "how much",
        ]),
    );
    map.insert(
        IntentKind::ShowList,
        phrases(&[
            "dekhao", "দেখাও", "dekhan", "দেখান", "show", "list", "display", "browse", "dekhi",
            "dekhte",
        ]),
    );
    map.insert(
        IntentKind::Popular,
        phrases(&[
            "popular",
            "bestseller",
            "best seller",
            "jonopriyo",
            "জনপ্রিয়",
            "top",
            "famous",
            "beshi bikri",
        ]),
    );
    map.insert(
        IntentKind::Budget,
        phrases(&[
            "cheap",
            "shosta",
            "সস্তা",
            "kom dam",
            "কম দাম",
            "kom dame",
            "budget",
            "affordable",
            "low price",
            "under",
            "within",
        ]),
    );
    map.insert(
        IntentKind::SomethingElse,
        phrases(&[
            "something else",
            "onno kichu",
            "অন্য কিছু",
            "different",
            "aro dekhao",
            "আরো দেখাও",
            "show more",
            "aro kichu",
            "onnota",
        ]),
    );
    map
}

fn default_category_triggers() -> HashMap<CategoryKind, Vec<String>> {
    let mut map = HashMap::new();
    map.insert(
        CategoryKind::Punjabi,
        phrases(&["punjabi", "পাঞ্জাবি", "panjabi", "punjabee"]),
    );
    map.insert(
        CategoryKind::Blouse,
        phrases(&["blouse", "ব্লাউজ", "blauj", "blawj"]),
    );
    map.insert(
        CategoryKind::Saree,
        phrases(&["saree", "sari", "শাড়ি", "sharee", "shari"]),
    );
    map.insert(
        CategoryKind::Custom,
        phrases(&[
            "custom",
            "tailor",
            "stitching",
            "stitch",
            "selai",
            "সেলাই",
            "banate",
            "বানাতে",
            "measurement",
        ]),
    );
    map.insert(
        CategoryKind::Occasion,
        phrases(&[
            "occasion",
            "wedding",
            "biye",
            "বিয়ে",
            "puja",
            "পূজা",
            "pujo",
            "eid",
            "ঈদ",
            "festival",
            "sherwani",
            "lehenga",
            "reception",
            "party",
        ]),
    );
    map
}

fn default_category_names() -> HashMap<CategoryKind, String> {
    let mut map = HashMap::new();
    map.insert(CategoryKind::Punjabi, "Punjabis".to_string());
    map.insert(CategoryKind::Blouse, "Blouses".to_string());
    map.insert(CategoryKind::Saree, "Sarees".to_string());
    map.insert(CategoryKind::Custom, "Custom Tailoring".to_string());
    map.insert(CategoryKind::Occasion, "Occasion Wear".to_string());
    map
}

fn default_attribute_markers() -> HashMap<Attribute, Vec<String>> {
    let mut map = HashMap::new();
    // No bare "men"/"men's"/"male": all three appear inside the women's
    // counterparts.
    map.insert(
        Attribute::Men,
        phrases(&[
            "for men",
            "for man",
            "gents",
            "chele",
            "ছেলে",
            "cheleder",
            "ছেলেদের",
            "for him",
            "husband",
        ]),
    );
    map.insert(
        Attribute::Women,
        phrases(&[
            "for women",
            "women",
            "ladies",
            "meye",
            "মেয়ে",
            "meyeder",
            "মেয়েদের",
            "for her",
            "wife",
            "mohila",
            "মহিলা",
            "female",
        ]),
    );
    map.insert(
        Attribute::Silk,
        phrases(&["silk", "সিল্ক", "resham", "রেশম", "silker"]),
    );
    map.insert(
        Attribute::Budget,
        phrases(&[
            "cheap",
            "shosta",
            "সস্তা",
            "kom dam",
            "কম দাম",
            "kom dame",
            "budget",
            "affordable",
            "low price",
        ]),
    );
    map
}

fn default_negation_phrases() -> Vec<String> {
    phrases(&[
        "cancel",
        "remove",
        "delete",
        "batil",
        "বাতিল",
        "bad dao",
        "বাদ দাও",
        "chai na",
        "chaina",
        "চাই না",
        "lagbe na",
        "লাগবে না",
        "nibo na",
        "nebo na",
        "নিবো না",
        "dorkar nei",
        "দরকার নেই",
        "don't",
        "dont",
        "do not",
    ])
}

fn default_quantity_words() -> Vec<QuantityWord> {
    // Scan order is significant; first whole-word hit wins. Bare "at",
    // "sat", and "noy" are excluded on purpose.
    let table: &[(&str, u32)] = &[
        ("one", 1),
        ("ek", 1),
        ("ekta", 1),
        ("akta", 1),
        ("এক", 1),
        ("একটা", 1),
        ("একটি", 1),
        ("two", 2),
        ("dui", 2),
        ("duita", 2),
        ("duto", 2),
        ("duta", 2),
        ("দুই", 2),
        ("দুটো", 2),
        ("দুইটা", 2),
        ("three", 3),
        ("tin", 3),
        ("tinta", 3),
        ("tinte", 3),
        ("তিন", 3),
        ("তিনটা", 3),
        ("তিনটে", 3),
        ("four", 4),
        ("char", 4),
        ("chaar", 4),
        ("charta", 4),
        ("চার", 4),
        ("চারটা", 4),
        ("five", 5),
        ("pach", 5),
        ("panch", 5),
        ("paanch", 5),
        ("pachta", 5),
        ("পাঁচ", 5),
        ("পাঁচটা", 5),
        ("six", 6),
        ("choy", 6),
        ("chhoy", 6),
        ("choyta", 6),
        ("ছয়", 6),
        ("ছয়টা", 6),
        ("seven", 7),
        ("saat", 7),
        ("saatta", 7),
        ("সাত", 7),
        ("সাতটা", 7),
        ("eight", 8),
        ("aat", 8),
        ("aatta", 8),
        ("আট", 8),
        ("আটটা", 8),
        ("nine", 9),
        ("noyta", 9),
        ("নয়টা", 9),
        ("ten", 10),
        ("dosh", 10),
        ("doshta", 10),
        ("দশ", 10),
        ("দশটা", 10),
    ];
    table
        .iter()
        .map(|(word, value)| QuantityWord {
            word: word.to_string(),
            value: *value,
        })
        .collect()
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            intent_triggers: default_intent_triggers(),
            category_triggers: default_category_triggers(),
            category_names: default_category_names(),
            attribute_markers: default_attribute_markers(),
            negation_phrases: default_negation_phrases(),
            quantity_words: default_quantity_words(),
        }
    }
}

impl Vocabulary {
    /// Load vocabulary tables from YAML and validate them.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, VocabularyError> {
        let raw = std::fs::read_to_string(path)?;
        let vocabulary: Vocabulary = serde_yaml::from_str(&raw)?;
        vocabulary.validate()?;
        Ok(vocabulary)
    }

    /// Check that every enum member has a non-empty table and quantity
    /// values are plausible counts.
    pub fn validate(&self) -> Result<(), VocabularyError> {
        for intent in IntentKind::ALL {
            let triggers =
                self.intent_triggers
                    .get(&intent)
                    .ok_or_else(|| VocabularyError::Missing {
                        what: format!("intent '{}'", intent),
                    })?;
            if triggers.is_empty() {
                return Err(VocabularyError::Empty {
                    what: format!("intent '{}'", intent),
                });
            }
        }
        for category in CategoryKind::ALL {
            let triggers = self.category_triggers.get(&category).ok_or_else(|| {
                VocabularyError::Missing {
                    what: format!("category '{}'", category),
                }
            })?;
            if triggers.is_empty() {
                return Err(VocabularyError::Empty {
                    what: format!("category '{}'", category),
                });
            }
            if self
                .category_names
                .get(&category)
                .map(|name| name.is_empty())
                .unwrap_or(true)
            {
                return Err(VocabularyError::Missing {
                    what: format!("category name for '{}'", category),
                });
            }
        }
        for attribute in Attribute::ALL {
            let markers = self.attribute_markers.get(&attribute).ok_or_else(|| {
                VocabularyError::Missing {
                    what: format!("attribute '{}'", attribute),
                }
            })?;
            if markers.is_empty() {
                return Err(VocabularyError::Empty {
                    what: format!("attribute '{}'", attribute),
                });
            }
        }
        if self.negation_phrases.is_empty() {
            return Err(VocabularyError::Empty {
                what: "negation phrases".to_string(),
            });
        }
        if self.quantity_words.is_empty() {
            return Err(VocabularyError::Empty {
                what: "quantity words".to_string(),
            });
        }
        for entry in &self.quantity_words {
            if entry.word.is_empty() {
                return Err(VocabularyError::Empty {
                    what: "quantity word".to_string(),
                });
            }
            if entry.value == 0 || entry.value >= 50 {
                return Err(VocabularyError::QuantityOutOfRange {
                    word: entry.word.clone(),
                    value: entry.value,
                });
            }
        }
        Ok(())
    }

    pub fn intent_triggers(&self, intent: IntentKind) -> &[String] {
        self.intent_triggers
            .get(&intent)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn category_triggers(&self, category: CategoryKind) -> &[String] {
        self.category_triggers
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Catalog category name a sub-intent maps to.
    pub fn category_name(&self, category: CategoryKind) -> Option<&str> {
        self.category_names.get(&category).map(String::as_str)
    }

    pub fn attribute_markers(&self, attribute: Attribute) -> &[String] {
        self.attribute_markers
            .get(&attribute)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
