//! Fuzzy product matching over catalog names and descriptions
//!
//! Chat queries carry typos and transliteration variance ("blak panjabi"),
//! so exact lookup is not enough. The matcher scores each product by the
//! best-aligned window of its search text against the query, using
//! normalized Levenshtein distance on a 0 = exact .. 1 = no-match scale.
//! A plain substring check of product names inside the query is the safety
//! net for exact names the scorer rejects.

use serde::{Deserialize, Serialize};

use stylist_core::CatalogIndex;

/// Tuning for the product matcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatcherConfig {
    /// Accept a candidate only when its score is strictly below this.
    pub score_threshold: f64,
    /// Only the first this-many characters of a product's search text are
    /// scanned; names sit at the front so they are always covered.
    pub match_window: usize,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            score_threshold: 0.4,
            match_window: 100,
        }
    }
}

struct MatchEntry {
    /// Canonical product name, catalog casing.
    name: String,
    name_lower: String,
    /// Lowercased name + description, truncated to the match window.
    search_chars: Vec<char>,
}

/// Finds the catalog product a free-text query refers to, if any.
pub struct ProductMatcher {
    entries: Vec<MatchEntry>,
    config: MatcherConfig,
}

impl ProductMatcher {
    /// Build the matcher's search index in catalog iteration order; ties are
    /// resolved toward earlier entries.
    pub fn from_catalog(catalog: &CatalogIndex, config: MatcherConfig) -> Self {
        let entries = catalog
            .products()
            .map(|product| {
                let search_chars = product
                    .search_text()
                    .chars()
                    .take(config.match_window)
                    .collect();
                MatchEntry {
                    name: product.name.clone(),
                    name_lower: product.name.to_lowercase(),
                    search_chars,
                }
            })
            .collect();
        Self { entries, config }
    }

    /// Best-matching product name for a query, or `None`.
    pub fn find_product(&self, query: &str) -> Option<&str> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return None;
        }
        let query_lower = trimmed.to_lowercase();
        let query_chars: Vec<char> = query_lower.chars().collect();

        let mut best: Option<(usize, f64)> = None;
        for (index, entry) in self.entries.iter().enumerate() {
            let score = best_window_score(&query_chars, &entry.search_chars);
            if score < self.config.score_threshold {
                let improved = match best {
                    None => true,
                    Some((_, best_score)) => score < best_score,
                };
                if improved {
                    best = Some((index, score));
                }
            }
        }

        if let Some((index, score)) = best {
            tracing::debug!(
                product = %self.entries[index].name,
                score,
                "fuzzy product match"
            );
            return Some(&self.entries[index].name);
        }

        // Substring fallback: any catalog product name inside the query.
        self.entries
            .iter()
            .find(|entry| query_lower.contains(&entry.name_lower))
            .map(|entry| entry.name.as_str())
    }
}

/// Minimum normalized edit distance between the query and any query-sized
/// window of the haystack.
fn best_window_score(query: &[char], haystack: &[char]) -> f64 {
    if query.is_empty() || haystack.is_empty() {
        return 1.0;
    }
    let window = query.len().min(haystack.len());
    let mut best = 1.0_f64;
    for start in 0..=(haystack.len() - window) {
        let candidate = &haystack[start..start + window];
        let distance = levenshtein(query, candidate);
        let score = distance as f64 / query.len().max(window) as f64;
        if score < best {
            best = score;
            if best == 0.0 {
                break;
            }
        }
    }
    best
}

/// Two-row Levenshtein distance over char slices.
fn levenshtein(a: &[char], b: &[char]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev_row: Vec<usize> = (0..=b.len()).collect();
    let mut curr_row: Vec<usize> = vec![0; b.len() + 1];

    for (i, a_char) in a.iter().enumerate() {
        curr_row[0] = i + 1;
        for (j, b_char) in b.iter().enumerate() {
            let cost = usize::from(a_char != b_char);
            curr_row[j + 1] = std::cmp::min(
                std::cmp::min(prev_row[j + 1] + 1, curr_row[j] + 1),
                prev_row[j] + cost,
            );
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[b.len()]
}
