//! Product catalog types and the immutable in-memory index
//!
//! The index is built once at startup from seed data, validated, and then
//! shared read-only (via `Arc`) with every component that needs it. Product
//! identity is the human-readable name; there is no surrogate id.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Format a minor-unit-free amount for user-facing text.
pub fn format_price(amount: u32) -> String {
    format!("₹{}", amount)
}

/// A single catalog product. Immutable after catalog load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique human-readable name, used as the primary key everywhere.
    pub name: String,
    /// Selling price (positive integer, no minor units).
    pub price: u32,
    /// Pre-discount price; when present it is strictly greater than `price`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<u32>,
    #[serde(default)]
    pub description: String,
    /// Average rating on a 0.0 to 5.0 scale.
    #[serde(default)]
    pub rating: f32,
    /// Number of ratings received; proxy for popularity.
    #[serde(default)]
    pub ratings_count: u32,
    /// Ordered image references; the first one is the card image.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
    /// Available size labels, when the product is sized.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sizes: Vec<String>,
    /// Free-form attribute tags (e.g. "men", "silk", "festive").
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl Product {
    /// Rounded discount percentage when an original price exists.
    pub fn discount_percent(&self) -> Option<u32> {
        self.original_price.map(|original| {
            let saved = original.saturating_sub(self.price) as f64;
            (saved / original as f64 * 100.0).round() as u32
        })
    }

    /// First image reference, if any.
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(|s| s.as_str())
    }

    /// Case-insensitive tag membership test.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    /// Lowercased name + description, the haystack for fuzzy matching.
    pub fn search_text(&self) -> String {
        let mut text = self.name.to_lowercase();
        if !self.description.is_empty() {
            text.push(' ');
            text.push_str(&self.description.to_lowercase());
        }
        text
    }
}

/// A named, ordered grouping of products, fixed at build time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub name: String,
    pub products: Vec<Product>,
}

/// Read-only index over categories and products.
///
/// Iteration order is catalog order (category order, then product order
/// within each category); every tie-break in the matcher and the response
/// rules relies on this being stable.
#[derive(Debug, Clone)]
pub struct CatalogIndex {
    categories: Vec<Category>,
    /// Lowercased product name -> (category index, product index).
    by_name: HashMap<String, (usize, usize)>,
}

impl CatalogIndex {
    /// Validate the seed data and build the index.
    pub fn build(categories: Vec<Category>) -> Result<Self, CatalogError> {
        if categories.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut by_name = HashMap::new();
        for (cat_idx, category) in categories.iter().enumerate() {
            if category.products.is_empty() {
                return Err(CatalogError::EmptyCategory(category.name.clone()));
            }
            for (prod_idx, product) in category.products.iter().enumerate() {
                if product.price == 0 {
                    return Err(CatalogError::InvalidPrice {
                        name: product.name.clone(),
                    });
                }
                if let Some(original) = product.original_price {
                    if original <= product.price {
                        return Err(CatalogError::InvalidOriginalPrice {
                            name: product.name.clone(),
                            original,
                            price: product.price,
                        });
                    }
                }
                if !(0.0..=5.0).contains(&product.rating) {
                    return Err(CatalogError::InvalidRating {
                        name: product.name.clone(),
                        rating: product.rating,
                    });
                }
                let key = product.name.to_lowercase();
                if by_name.insert(key, (cat_idx, prod_idx)).is_some() {
                    return Err(CatalogError::DuplicateProduct(product.name.clone()));
                }
            }
        }

        Ok(Self {
            categories,
            by_name,
        })
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Category names in catalog order.
    pub fn category_names(&self) -> Vec<String> {
        self.categories.iter().map(|c| c.name.clone()).collect()
    }

    /// Case-insensitive category lookup.
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// All products in catalog order.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.categories.iter().flat_map(|c| c.products.iter())
    }

    pub fn product_count(&self) -> usize {
        self.by_name.len()
    }

    /// Case-insensitive exact-name lookup.
    pub fn product_by_name(&self, name: &str) -> Option<&Product> {
        let (cat_idx, prod_idx) = *self.by_name.get(&name.to_lowercase())?;
        Some(&self.categories[cat_idx].products[prod_idx])
    }

    /// Top `n` products by ratings count, catalog order breaking ties.
    pub fn top_by_ratings(&self, n: usize) -> Vec<&Product> {
        let mut products: Vec<&Product> = self.products().collect();
        products.sort_by(|a, b| b.ratings_count.cmp(&a.ratings_count));
        products.truncate(n);
        products
    }

    /// Products priced at or under `ceiling`, ascending by price, up to `n`.
    pub fn under_price(&self, ceiling: u32, n: usize) -> Vec<&Product> {
        let mut products: Vec<&Product> =
            self.products().filter(|p| p.price <= ceiling).collect();
        products.sort_by(|a, b| a.price.cmp(&b.price));
        products.truncate(n);
        products
    }

    /// Products priced strictly above `floor`, descending by price, up to `n`.
    pub fn above_price(&self, floor: u32, n: usize) -> Vec<&Product> {
        let mut products: Vec<&Product> =
            self.products().filter(|p| p.price > floor).collect();
        products.sort_by(|a, b| b.price.cmp(&a.price));
        products.truncate(n);
        products
    }

    /// Products carrying an original price (i.e. currently discounted).
    pub fn discounted(&self) -> Vec<&Product> {
        self.products()
            .filter(|p| p.original_price.is_some())
            .collect()
    }
}
