//! The local response engine: an ordered cascade of keyword rules
//!
//! Every inbound message is tried against the rules below, top to bottom;
//! the first rule that produces a reply wins and `None` means "let the
//! fallback engine take it". Several rules can structurally match the same
//! message ("koto dam saree" is both a price question and a category
//! mention), so the ordering is load-bearing: reorder with care.
//!
//! The cascade never errors. A rule whose lookup comes up empty falls
//! through to the next rule, and a message nothing matches resolves to
//! `None`; unparseable input is the fallback engine's job, not a failure.

use std::sync::Arc;

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use stylist_config::{render, StylistConfig};
use stylist_core::{
    format_price, Attribute, CartDelta, Category, CategoryKind, IntentKind, MessageTagger,
    Product, ProductCard, Reply,
};
use stylist_text_processing::{
    extract_price_bound, IntentClassifier, KeywordTagger, MatcherConfig, ProductMatcher,
    QuantityExtractor,
};

/// Tunables for the rule cascade. Price fields are rupee amounts; length
/// fields count characters, not bytes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Fuzzy product matcher tuning.
    pub matcher: MatcherConfig,
    /// Ordering messages at or above this length defer to the fallback
    /// engine; long messages tend to carry conditions the keyword rules
    /// cannot see.
    pub order_max_chars: usize,
    /// Greeting replies only trigger on short messages.
    pub greeting_max_chars: usize,
    /// Word limit for the bare product-name rule.
    pub bare_product_max_words: usize,
    /// Ceiling for the budget attribute when the message carries no number.
    pub attribute_budget_ceiling: u32,
    /// Ceiling for the budget listing rule when the message carries no
    /// number.
    pub default_budget_ceiling: u32,
    /// Price floor for the premium rule.
    pub premium_floor: u32,
    /// Card count for recommendation rules (random picks, attribute
    /// filters, trending, premium, quick delivery).
    pub recommendation_cap: usize,
    /// Card count for explicit "show me" category listings.
    pub listing_cap: usize,
    /// Card count for popularity, budget, and bare-category listings.
    pub browse_cap: usize,
    /// Upsell suggestions attached to an added item.
    pub upsell_count: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            matcher: MatcherConfig::default(),
            order_max_chars: 60,
            greeting_max_chars: 25,
            bare_product_max_words: 3,
            attribute_budget_ceiling: 150,
            default_budget_ceiling: 1000,
            premium_floor: 1500,
            recommendation_cap: 8,
            listing_cap: 15,
            browse_cap: 12,
            upsell_count: 3,
        }
    }
}

/// Rule-based handler tried before any fallback engine.
///
/// Stateless with respect to a single message: the same input always takes
/// the same rule path. The only non-determinism is the injected random
/// source behind the "surprise me" rules, which tests pin with
/// [`with_rng_seed`](Self::with_rng_seed).
pub struct LocalResponseEngine {
    bundle: Arc<StylistConfig>,
    config: EngineConfig,
    matcher: ProductMatcher,
    classifier: IntentClassifier,
    quantity: QuantityExtractor,
    tagger: Box<dyn MessageTagger>,
    rng: Mutex<StdRng>,
}

impl LocalResponseEngine {
    pub fn new(bundle: Arc<StylistConfig>, config: EngineConfig) -> Self {
        let tagger = Box::new(KeywordTagger::from_vocabulary(&bundle.vocabulary));
        Self::with_tagger(bundle, config, tagger)
    }

    /// Build with a custom tagger implementation behind the
    /// [`MessageTagger`] seam.
    pub fn with_tagger(
        bundle: Arc<StylistConfig>,
        config: EngineConfig,
        tagger: Box<dyn MessageTagger>,
    ) -> Self {
        let matcher = ProductMatcher::from_catalog(&bundle.catalog, config.matcher.clone());
        let classifier = IntentClassifier::from_vocabulary(&bundle.vocabulary);
        let quantity = QuantityExtractor::from_vocabulary(&bundle.vocabulary);
        Self {
            bundle,
            config,
            matcher,
            classifier,
            quantity,
            tagger,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Replace the random source with a seeded one.
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng = Mutex::new(StdRng::seed_from_u64(seed));
        self
    }

    /// Try to answer `message` locally. `None` asks the caller to escalate.
    pub fn try_local_response(&self, message: &str) -> Option<Reply> {
        let text = message.trim();
        if text.is_empty() {
            return None;
        }
        let char_count = text.chars().count();
        let intents = self.classifier.classify(text);

        // Ordering language is absorbing: either the order is simple enough
        // to handle here, or the whole message goes to the fallback engine.
        // Falling through to a listing that ignores "dao" would read as a
        // refusal.
        if intents.contains(&IntentKind::Order) {
            return self.handle_order(text, char_count);
        }

        if intents.contains(&IntentKind::Greeting) && char_count < self.config.greeting_max_chars
        {
            return Some(self.greeting());
        }

        if intents.contains(&IntentKind::WhatToWear) {
            return Some(self.random_picks(&self.bundle.templates.what_to_wear));
        }

        if let Some(reply) = self.attribute_filtered(text) {
            return Some(reply);
        }

        if intents.contains(&IntentKind::NewArrival) {
            return Some(self.trending());
        }

        if intents.contains(&IntentKind::Location) {
            return Some(Reply::Location {
                response: self.bundle.store.location_text(),
            });
        }
        if intents.contains(&IntentKind::Hours) {
            return Some(Reply::Hours {
                response: self.bundle.store.hours_text(),
            });
        }
        if intents.contains(&IntentKind::Contact) {
            return Some(Reply::Contact {
                response: self.bundle.store.contact_text(),
            });
        }

        if intents.contains(&IntentKind::QuickDelivery) {
            if let Some(reply) = self.quick_delivery() {
                return Some(reply);
            }
        }

        if intents.contains(&IntentKind::Premium) {
            if let Some(reply) = self.premium() {
                return Some(reply);
            }
        }

        if intents.contains(&IntentKind::PriceLookup) {
            if let Some(reply) = self.price_lookup(text) {
                return Some(reply);
            }
        }

        if intents.contains(&IntentKind::ShowList) {
            if let Some(reply) = self.category_listing(text, self.config.listing_cap) {
                return Some(reply);
            }
        }

        if intents.contains(&IntentKind::Popular) {
            return Some(self.popular());
        }

        if intents.contains(&IntentKind::Budget) {
            if let Some(reply) = self.budget_listing(text) {
                return Some(reply);
            }
        }

        if text.split_whitespace().count() <= self.config.bare_product_max_words {
            if let Some(reply) = self.bare_product(text) {
                return Some(reply);
            }
        }

        if let Some(reply) = self.category_listing(text, self.config.browse_cap) {
            return Some(reply);
        }

        if intents.contains(&IntentKind::SomethingElse) {
            return Some(self.random_picks(&self.bundle.templates.something_else));
        }

        tracing::debug!("no local rule matched, deferring to fallback");
        None
    }

    /// Negated ordering language (cancellation, "lagbe na") carries nuance
    /// the keyword rules cannot resolve, so it always escalates.
    fn handle_order(&self, text: &str, char_count: usize) -> Option<Reply> {
        if self.tagger.detects_negation(text) {
            tracing::debug!("negated ordering language, escalating");
            return None;
        }
        if char_count >= self.config.order_max_chars {
            tracing::debug!(chars = char_count, "order message too long to handle locally");
            return None;
        }
        let name = self.matcher.find_product(text)?;
        let product = self.bundle.catalog.product_by_name(name)?;
        let quantity = self.quantity.extract_quantity(text);

        let delta = CartDelta {
            name: product.name.clone(),
            price: product.price,
            quantity,
        };
        let line_total = delta.line_total();
        let response = render(
            &self.bundle.templates.item_added,
            &[
                ("quantity", quantity.to_string()),
                ("item", product.name.clone()),
            ],
        );
        Some(Reply::ItemAdded {
            response,
            cart_items: vec![delta],
            total_price: Some(line_total),
            suggested_items: self.upsells(&product.name),
        })
    }

    fn greeting(&self) -> Reply {
        let response = render(
            &self.bundle.templates.greeting,
            &[("store", self.bundle.store.name.clone())],
        );
        Reply::General {
            response,
            suggested_items: self.bundle.catalog.category_names(),
        }
    }

    /// Attribute markers conjoin: "cheap silk blouse" must satisfy both the
    /// silk and the budget predicate. The filter runs over the whole
    /// catalog; a category word in the same message does not narrow it.
    fn attribute_filtered(&self, text: &str) -> Option<Reply> {
        let attributes: Vec<Attribute> = Attribute::ALL
            .iter()
            .copied()
            .filter(|&attribute| self.tagger.has_attribute(text, attribute))
            .collect();
        if attributes.is_empty() {
            return None;
        }

        let budget_limited = attributes.contains(&Attribute::Budget);
        let ceiling = extract_price_bound(text).unwrap_or(self.config.attribute_budget_ceiling);
        let mut products: Vec<&Product> = self
            .bundle
            .catalog
            .products()
            .filter(|product| {
                attributes.iter().all(|attribute| match attribute {
                    Attribute::Men => product.has_tag("men"),
                    Attribute::Women => product.has_tag("women"),
                    Attribute::Silk => product.has_tag("silk"),
                    Attribute::Budget => product.price <= ceiling,
                })
            })
            .collect();
        if products.is_empty() {
            tracing::debug!(?attributes, "attribute filter matched nothing, falling through");
            return None;
        }

        if budget_limited {
            products.sort_by(|a, b| a.price.cmp(&b.price));
        } else {
            products.sort_by(|a, b| b.ratings_count.cmp(&a.ratings_count));
        }
        products.truncate(self.config.recommendation_cap);
        Some(recommendation(
            self.bundle.templates.attribute_filtered.clone(),
            &products,
        ))
    }

    fn trending(&self) -> Reply {
        let products = self
            .bundle
            .catalog
            .top_by_ratings(self.config.recommendation_cap);
        recommendation(self.bundle.templates.new_arrivals.clone(), &products)
    }

    /// Stocked punjabis and blouses ship same-day, so a delivery question
    /// gets the front of those two shelves.
    fn quick_delivery(&self) -> Option<Reply> {
        let per_category = self.config.recommendation_cap / 2;
        let mut products: Vec<&Product> = Vec::new();
        for kind in [CategoryKind::Punjabi, CategoryKind::Blouse] {
            if let Some(category) = self.category_of(kind) {
                products.extend(category.products.iter().take(per_category));
            }
        }
        if products.is_empty() {
            return None;
        }
        Some(recommendation(
            self.bundle.templates.quick_delivery.clone(),
            &products,
        ))
    }

    fn premium(&self) -> Option<Reply> {
        let products = self
            .bundle
            .catalog
            .above_price(self.config.premium_floor, self.config.recommendation_cap);
        if products.is_empty() {
            return None;
        }
        Some(recommendation(
            self.bundle.templates.premium.clone(),
            &products,
        ))
    }

    /// A price question about a resolvable product gets a single detail
    /// card; without one the question falls through to the listing rules.
    fn price_lookup(&self, text: &str) -> Option<Reply> {
        let name = self.matcher.find_product(text)?;
        let product = self.bundle.catalog.product_by_name(name)?;
        let response = match (product.original_price, product.discount_percent()) {
            (Some(original), Some(discount)) => render(
                &self.bundle.templates.price_discounted,
                &[
                    ("item", product.name.clone()),
                    ("price", format_price(product.price)),
                    ("discount", discount.to_string()),
                    ("original", format_price(original)),
                ],
            ),
            _ => render(
                &self.bundle.templates.price_single,
                &[
                    ("item", product.name.clone()),
                    ("price", format_price(product.price)),
                ],
            ),
        };
        Some(detail_card(response, product))
    }

    fn category_listing(&self, text: &str, cap: usize) -> Option<Reply> {
        let kind = self.classifier.first_category(text)?;
        let category = self.category_of(kind)?;
        let products: Vec<&Product> = category.products.iter().take(cap).collect();
        let response = render(
            &self.bundle.templates.category_listing,
            &[("category", category.name.clone())],
        );
        Some(recommendation(response, &products))
    }

    fn popular(&self) -> Reply {
        let products = self.bundle.catalog.top_by_ratings(self.config.browse_cap);
        recommendation(self.bundle.templates.popular.clone(), &products)
    }

    fn budget_listing(&self, text: &str) -> Option<Reply> {
        let ceiling = extract_price_bound(text).unwrap_or(self.config.default_budget_ceiling);
        let products = self
            .bundle
            .catalog
            .under_price(ceiling, self.config.browse_cap);
        if products.is_empty() {
            return None;
        }
        let response = render(
            &self.bundle.templates.budget,
            &[("price", format_price(ceiling))],
        );
        Some(recommendation(response, &products))
    }

    fn bare_product(&self, text: &str) -> Option<Reply> {
        let name = self.matcher.find_product(text)?;
        let product = self.bundle.catalog.product_by_name(name)?;
        let response = render(
            &self.bundle.templates.bare_product,
            &[
                ("item", product.name.clone()),
                ("price", format_price(product.price)),
            ],
        );
        Some(detail_card(response, product))
    }

    fn random_picks(&self, template: &str) -> Reply {
        let all: Vec<&Product> = self.bundle.catalog.products().collect();
        let mut rng = self.rng.lock();
        let picks: Vec<&Product> = all
            .choose_multiple(&mut *rng, self.config.recommendation_cap)
            .copied()
            .collect();
        recommendation(template.to_string(), &picks)
    }

    /// Generic follow-up suggestions: the store's best sellers, minus the
    /// item just added.
    fn upsells(&self, exclude: &str) -> Vec<String> {
        self.bundle
            .catalog
            .top_by_ratings(self.config.upsell_count + 1)
            .into_iter()
            .filter(|product| product.name != exclude)
            .take(self.config.upsell_count)
            .map(|product| product.name.clone())
            .collect()
    }

    fn category_of(&self, kind: CategoryKind) -> Option<&Category> {
        let name = self.bundle.vocabulary.category_name(kind)?;
        self.bundle.catalog.category(name)
    }
}

fn recommendation(response: String, products: &[&Product]) -> Reply {
    Reply::ProductRecommendation {
        response,
        suggested_product: None,
        suggested_items: Vec::new(),
        recommended_products: products.iter().map(|p| ProductCard::from(*p)).collect(),
    }
}

fn detail_card(response: String, product: &Product) -> Reply {
    Reply::ProductRecommendation {
        response,
        suggested_product: Some(product.name.clone()),
        suggested_items: Vec::new(),
        recommended_products: vec![ProductCard::from(product)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stylist_core::ActionType;

    fn bundle() -> Arc<StylistConfig> {
        Arc::new(StylistConfig::built_in().unwrap())
    }

    fn engine() -> LocalResponseEngine {
        LocalResponseEngine::new(bundle(), EngineConfig::default()).with_rng_seed(7)
    }

    fn cards(reply: &Reply) -> &[ProductCard] {
        match reply {
            Reply::ProductRecommendation {
                recommended_products,
                ..
            } => recommended_products,
            other => panic!("expected recommendation, got {:?}", other.action_type()),
        }
    }

    #[test]
    fn test_order_message_adds_item() {
        let reply = engine()
            .try_local_response("Black Designer Punjabi dao")
            .unwrap();
        let Reply::ItemAdded {
            response,
            cart_items,
            total_price,
            suggested_items,
        } = reply
        else {
            panic!("expected item_added");
        };
        assert_eq!(cart_items.len(), 1);
        assert_eq!(cart_items[0].name, "Black Designer Punjabi");
        assert_eq!(cart_items[0].price, 957);
        assert_eq!(cart_items[0].quantity, 1);
        assert_eq!(total_price, Some(957));
        assert!(response.contains("1 x Black Designer Punjabi"));
        assert_eq!(
            suggested_items,
            vec![
                "Plain Cotton Blouse".to_string(),
                "Readymade Cotton Blouse".to_string(),
                "Tant Cotton Saree".to_string(),
            ]
        );
    }

    #[test]
    fn test_order_with_quantity() {
        let reply = engine()
            .try_local_response("2ta Navy Blue Designer Punjabi dao")
            .unwrap();
        let Reply::ItemAdded {
            cart_items,
            total_price,
            ..
        } = reply
        else {
            panic!("expected item_added");
        };
        assert_eq!(cart_items[0].quantity, 2);
        assert_eq!(total_price, Some(2094));
    }

    #[test]
    fn test_negated_order_escalates() {
        let engine = engine();
        assert_eq!(engine.try_local_response("cancel my punjabi order"), None);
        assert_eq!(
            engine.try_local_response("ei punjabi ta ar lagbe na"),
            None
        );
    }

    #[test]
    fn test_long_order_message_escalates() {
        // Resolvable product, but past the length gate.
        let message =
            "i want to order the Black Designer Punjabi for the wedding of my cousin";
        assert!(message.chars().count() >= 60);
        assert_eq!(engine().try_local_response(message), None);
    }

    #[test]
    fn test_order_without_product_escalates() {
        assert_eq!(engine().try_local_response("ami ekta jinish kinbo"), None);
    }

    #[test]
    fn test_greeting_replies_with_store_and_categories() {
        let reply = engine().try_local_response("hi").unwrap();
        let Reply::General {
            response,
            suggested_items,
        } = reply
        else {
            panic!("expected general");
        };
        assert!(response.contains("TantuShree"));
        assert_eq!(suggested_items.len(), 5);
        assert!(suggested_items.contains(&"Punjabis".to_string()));
    }

    #[test]
    fn test_greeting_word_in_long_message_is_not_a_greeting() {
        let reply = engine()
            .try_local_response("hello, amar ekta complaint ache apnader delivery niye");
        assert_eq!(reply, None);
    }

    #[test]
    fn test_what_to_wear_samples_the_catalog() {
        let bundle = bundle();
        let engine =
            LocalResponseEngine::new(Arc::clone(&bundle), EngineConfig::default())
                .with_rng_seed(7);
        let reply = engine.try_local_response("pujo te ki porbo?").unwrap();
        assert_eq!(reply.action_type(), ActionType::ProductRecommendation);
        let picks = cards(&reply);
        assert_eq!(picks.len(), 8);
        for card in picks {
            assert!(bundle.catalog.product_by_name(&card.name).is_some());
        }
    }

    #[test]
    fn test_attribute_filter_conjoins_predicates() {
        let bundle = bundle();
        let engine = LocalResponseEngine::new(Arc::clone(&bundle), EngineConfig::default());
        let reply = engine.try_local_response("silk saree for women").unwrap();
        let picks = cards(&reply);
        // Catalog-wide: silk blouses qualify too, ranked by popularity.
        assert_eq!(picks.len(), 5);
        assert_eq!(picks[0].name, "Red Katan Blouse");
        for card in picks {
            let product = bundle.catalog.product_by_name(&card.name).unwrap();
            assert!(product.has_tag("silk") && product.has_tag("women"));
        }
        for pair in picks.windows(2) {
            assert!(pair[0].ratings_count >= pair[1].ratings_count);
        }
    }

    #[test]
    fn test_budget_attribute_uses_embedded_ceiling() {
        let reply = engine().try_local_response("cheap saree under 500").unwrap();
        let picks = cards(&reply);
        assert_eq!(picks.len(), 6);
        for card in picks {
            assert!(card.price <= 500);
        }
        for pair in picks.windows(2) {
            assert!(pair[0].price <= pair[1].price);
        }
    }

    #[test]
    fn test_budget_attribute_default_ceiling() {
        let reply = engine().try_local_response("shosta kichu dekhan").unwrap();
        let picks = cards(&reply);
        let names: Vec<&str> = picks.iter().map(|card| card.name.as_str()).collect();
        assert_eq!(names, vec!["Readymade Cotton Blouse", "Plain Cotton Blouse"]);
    }

    #[test]
    fn test_new_arrivals_ranked_by_ratings() {
        let reply = engine()
            .try_local_response("notun collection eseche?")
            .unwrap();
        let picks = cards(&reply);
        assert_eq!(picks.len(), 8);
        assert_eq!(picks[0].name, "Plain Cotton Blouse");
        for pair in picks.windows(2) {
            assert!(pair[0].ratings_count >= pair[1].ratings_count);
        }
    }

    #[test]
    fn test_store_questions_get_fixed_answers() {
        let engine = engine();

        let location = engine.try_local_response("where is your shop").unwrap();
        assert_eq!(location.action_type(), ActionType::Location);
        assert!(location.response().contains("Gariahat"));

        let hours = engine.try_local_response("what time do you open").unwrap();
        assert_eq!(hours.action_type(), ActionType::Hours);
        assert!(hours.response().contains("10:00 AM"));

        let contact = engine.try_local_response("whatsapp number ache?").unwrap();
        assert_eq!(contact.action_type(), ActionType::Contact);
        assert!(contact.response().contains("+91 98300 12345"));
    }

    #[test]
    fn test_quick_delivery_slices_fast_categories() {
        let bundle = bundle();
        let engine = LocalResponseEngine::new(Arc::clone(&bundle), EngineConfig::default());
        let reply = engine.try_local_response("taratari delivery hobe?").unwrap();
        let picks = cards(&reply);
        assert_eq!(picks.len(), 8);
        let punjabis = bundle.catalog.category("Punjabis").unwrap();
        let blouses = bundle.catalog.category("Blouses").unwrap();
        for card in picks {
            let stocked = punjabis
                .products
                .iter()
                .chain(blouses.products.iter())
                .any(|product| product.name == card.name);
            assert!(stocked, "{} is not a stocked fast-mover", card.name);
        }
    }

    #[test]
    fn test_premium_collection_above_floor() {
        let reply = engine()
            .try_local_response("premium collection dekhan")
            .unwrap();
        let picks = cards(&reply);
        assert_eq!(picks.len(), 8);
        assert_eq!(picks[0].name, "Wedding Sherwani Set");
        for card in picks {
            assert!(card.price > 1500);
        }
        for pair in picks.windows(2) {
            assert!(pair[0].price >= pair[1].price);
        }
    }

    #[test]
    fn test_price_lookup_beats_category_listing() {
        let reply = engine()
            .try_local_response("দাম কত Black Designer Punjabi")
            .unwrap();
        let Reply::ProductRecommendation {
            response,
            suggested_product,
            recommended_products,
            ..
        } = reply
        else {
            panic!("expected product_recommendation");
        };
        assert_eq!(suggested_product.as_deref(), Some("Black Designer Punjabi"));
        assert_eq!(recommended_products.len(), 1);
        assert!(response.contains("₹957"));
        assert!(response.contains("20"));
    }

    #[test]
    fn test_price_lookup_without_discount() {
        let reply = engine()
            .try_local_response("White Cotton Punjabi price?")
            .unwrap();
        assert!(reply.response().contains("₹649"));
        assert!(!reply.response().contains("off"));
    }

    #[test]
    fn test_price_question_without_product_falls_to_category() {
        let reply = engine().try_local_response("koto dam sarees").unwrap();
        assert_eq!(reply.action_type(), ActionType::ProductRecommendation);
        assert!(reply.response().contains("Sarees"));
        assert_eq!(cards(&reply).len(), 8);
    }

    #[test]
    fn test_show_list_verb_lists_category() {
        let bundle = bundle();
        let engine = LocalResponseEngine::new(Arc::clone(&bundle), EngineConfig::default());
        let reply = engine.try_local_response("show me all sarees").unwrap();
        assert!(reply.response().contains("Sarees"));
        let sarees = bundle.catalog.category("Sarees").unwrap();
        let picks = cards(&reply);
        assert_eq!(picks.len(), sarees.products.len());
        for (card, product) in picks.iter().zip(sarees.products.iter()) {
            assert_eq!(card.name, product.name);
        }
    }

    #[test]
    fn test_popular_ranks_by_ratings_count() {
        let reply = engine().try_local_response("best seller gulo ki?").unwrap();
        let picks = cards(&reply);
        assert_eq!(picks.len(), 12);
        assert_eq!(picks[0].name, "Plain Cotton Blouse");
        for pair in picks.windows(2) {
            assert!(pair[0].ratings_count >= pair[1].ratings_count);
        }
    }

    #[test]
    fn test_budget_listing_with_number() {
        let reply = engine().try_local_response("sarees under 1000 taka").unwrap();
        assert!(reply.response().contains("₹1000"));
        let picks = cards(&reply);
        assert_eq!(picks.len(), 12);
        for card in picks {
            assert!(card.price <= 1000);
        }
        for pair in picks.windows(2) {
            assert!(pair[0].price <= pair[1].price);
        }
    }

    #[test]
    fn test_budget_listing_default_ceiling() {
        let reply = engine()
            .try_local_response("within amar range e kichu dekhan")
            .unwrap();
        assert!(reply.response().contains("₹1000"));
        for card in cards(&reply) {
            assert!(card.price <= 1000);
        }
    }

    #[test]
    fn test_bare_product_mention() {
        let reply = engine().try_local_response("jamdani saree").unwrap();
        let Reply::ProductRecommendation {
            response,
            suggested_product,
            recommended_products,
            ..
        } = reply
        else {
            panic!("expected product_recommendation");
        };
        assert_eq!(suggested_product.as_deref(), Some("Jamdani Saree"));
        assert_eq!(recommended_products.len(), 1);
        assert!(response.contains("₹2999"));
    }

    #[test]
    fn test_bare_category_in_bengali_script() {
        // The fuzzy matcher only indexes Latin search text, so a Bengali
        // category word reaches the category rule instead.
        let reply = engine().try_local_response("শাড়ি").unwrap();
        assert!(reply.response().contains("Sarees"));
        assert_eq!(cards(&reply).len(), 8);
    }

    #[test]
    fn test_something_else_reshuffles() {
        let reply = engine().try_local_response("onno kichu dekhan").unwrap();
        assert_eq!(reply.action_type(), ActionType::ProductRecommendation);
        assert_eq!(cards(&reply).len(), 8);
    }

    #[test]
    fn test_unrelated_chatter_is_not_handled() {
        let engine = engine();
        assert_eq!(
            engine.try_local_response("amar parcel ekhono asheni keno"),
            None
        );
        assert_eq!(engine.try_local_response(""), None);
        assert_eq!(engine.try_local_response("   "), None);
    }

    #[test]
    fn test_same_message_same_outcome() {
        let engine = engine();
        let first = engine
            .try_local_response("koto dam Black Designer Punjabi")
            .unwrap();
        let second = engine
            .try_local_response("koto dam Black Designer Punjabi")
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_seeded_rng_is_deterministic() {
        let sample = |seed: u64| -> Vec<String> {
            let engine =
                LocalResponseEngine::new(bundle(), EngineConfig::default()).with_rng_seed(seed);
            cards(&engine.try_local_response("ki porbo aj?").unwrap())
                .iter()
                .map(|card| card.name.clone())
                .collect()
        };
        assert_eq!(sample(42), sample(42));
    }
}
