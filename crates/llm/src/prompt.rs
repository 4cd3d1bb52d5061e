//! System-context assembly for the remote fallback.
//!
//! Assembled once at startup and reused for every escalated message: the
//! full catalog and store knowledge rendered as structured text, a fixed
//! styling-knowledge block, the multi-step shopping-flow protocol, and
//! the JSON reply contract the model must follow.

use stylist_config::StoreInfo;
use stylist_core::{format_price, CatalogIndex};

/// Builds the system context section by section.
pub struct SystemContextBuilder<'a> {
    catalog: &'a CatalogIndex,
    store: &'a StoreInfo,
    sections: Vec<String>,
}

impl<'a> SystemContextBuilder<'a> {
    pub fn new(catalog: &'a CatalogIndex, store: &'a StoreInfo) -> Self {
        Self {
            catalog,
            store,
            sections: Vec::new(),
        }
    }

    /// Who the model is speaking for.
    pub fn with_identity(mut self) -> Self {
        self.sections.push(format!(
            r#"You are the AI stylist of {name} - {tagline}. You help shoppers in
English, Bengali, and Banglish (Bengali written in Latin letters); mirror
whichever the shopper uses. Be warm and concise, like a helpful shop
assistant, and only ever recommend items from the catalog below with their
exact names and prices."#,
            name = self.store.name,
            tagline = self.store.tagline,
        ));
        self
    }

    /// Every product, grouped by category.
    pub fn with_catalog(mut self) -> Self {
        let mut section = String::from("## Catalog\n");
        for category in self.catalog.categories() {
            section.push_str(&format!("\n### {}\n", category.name));
            for product in &category.products {
                let price = match (product.discount_percent(), product.original_price) {
                    (Some(pct), Some(original)) => format!(
                        "{} ({}% off, was {})",
                        format_price(product.price),
                        pct,
                        format_price(original)
                    ),
                    _ => format_price(product.price),
                };
                let mut line = format!("- {} - {}", product.name, price);
                line.push_str(&format!(
                    " | rating {:.1} ({} ratings)",
                    product.rating, product.ratings_count
                ));
                if !product.sizes.is_empty() {
                    line.push_str(&format!(" | sizes: {}", product.sizes.join(", ")));
                }
                line.push_str(&format!(" | {}\n", product.description));
                section.push_str(&line);
            }
        }
        self.sections.push(section);
        self
    }

    /// Best sellers and current discounts, so the model can answer
    /// "what's popular" without scanning the whole catalog.
    pub fn with_highlights(mut self) -> Self {
        let best_sellers: Vec<&str> = self
            .catalog
            .top_by_ratings(3)
            .into_iter()
            .map(|p| p.name.as_str())
            .collect();

        let discounted: Vec<String> = self
            .catalog
            .discounted()
            .into_iter()
            .filter_map(|p| {
                p.discount_percent()
                    .map(|pct| format!("{} ({}% off)", p.name, pct))
            })
            .collect();

        let mut section = String::from("## Highlights\n");
        section.push_str(&format!("Best sellers: {}.\n", best_sellers.join(", ")));
        if !discounted.is_empty() {
            section.push_str(&format!("Current discounts: {}.\n", discounted.join(", ")));
        }
        self.sections.push(section);
        self
    }

    /// Fixed pairing knowledge for traditional Bengali wear.
    pub fn with_styling_guide(mut self) -> Self {
        self.sections.push(
            r#"## Styling Knowledge
- Punjabis pair with churidar or plain pyjama; add a stole for weddings and pujo.
- Silk and Jamdani sarees suit weddings and receptions; tant cotton works for daily and office wear.
- Blouse colours either match the saree border or contrast it; zari blouses lift plain silks.
- For gifting, suggest occasion wear or a saree-blouse pairing rather than single basics.
- In hot, humid weather recommend breathable cotton over heavier silk."#
                .to_string(),
        );
        self
    }

    /// Address, hours, and contact channels.
    pub fn with_store_details(mut self) -> Self {
        self.sections.push(format!(
            "## Store\n{name}\nAddress: {address}\nHours: {hours}\nPhone: {phone} | WhatsApp: {whatsapp} | Email: {email}",
            name = self.store.name,
            address = self.store.address,
            hours = self.store.hours,
            phone = self.store.phone,
            whatsapp = self.store.whatsapp,
            email = self.store.email,
        ));
        self
    }

    /// The multi-step ordering flow the model must follow.
    pub fn with_shopping_protocol(mut self) -> Self {
        self.sections.push(
            r#"## Shopping Flow
When the shopper wants to buy something:
1. Work out the quantity from number words (English, Bengali script, or Banglish like "duita") or digits; default to 1.
2. Confirm each addition with actionType "item_added", the added line in cartItems as {name, price, quantity}, and the running total so far in totalPrice.
3. When the shopper asks for the total, answer with actionType "show_total", every accumulated cartItems line, and totalPrice.
4. When the shopper confirms the order, answer with actionType "add_to_cart", a short celebratory confirmation, and the final totalPrice.
Prices are always in ₹ with no decimals. Suggest one or two pairing items after an addition."#
                .to_string(),
        );
        self
    }

    /// The strict JSON shape of every reply.
    pub fn with_reply_contract(mut self) -> Self {
        self.sections.push(
            r#"## Response Format
Answer with a single JSON object and nothing else (no code fences, no prose around it):
{"response": string,
 "actionType": "general" | "product_recommendation" | "location" | "hours" | "contact" | "order" | "item_added" | "show_total" | "add_to_cart",
 "suggestedProduct": string (optional),
 "suggestedItems": [string] (optional),
 "recommendedProducts": [{"name": string, "price": number, "description": string?, "rating": number?, "ratingsCount": number?, "image": string?}] (optional),
 "cartItems": [{"name": string, "price": number, "quantity": number}] (optional),
 "totalPrice": number (optional)}
Rules: "item_added" requires cartItems; "show_total" and "add_to_cart" require totalPrice. Use exact catalog names and prices. "response" is the text shown to the shopper, in the shopper's language."#
                .to_string(),
        );
        self
    }

    pub fn build(self) -> String {
        self.sections.join("\n\n")
    }
}

/// The complete system context in the standard section order.
pub fn full_system_context(catalog: &CatalogIndex, store: &StoreInfo) -> String {
    SystemContextBuilder::new(catalog, store)
        .with_identity()
        .with_catalog()
        .with_highlights()
        .with_styling_guide()
        .with_store_details()
        .with_shopping_protocol()
        .with_reply_contract()
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use stylist_config::StylistConfig;

    #[test]
    fn test_context_covers_every_product() {
        let config = StylistConfig::built_in().unwrap();
        let context = full_system_context(&config.catalog, &config.store);
        for product in config.catalog.products() {
            assert!(
                context.contains(&product.name),
                "missing product: {}",
                product.name
            );
        }
    }

    #[test]
    fn test_context_includes_store_and_contract() {
        let config = StylistConfig::built_in().unwrap();
        let context = full_system_context(&config.catalog, &config.store);
        assert!(context.contains(&config.store.name));
        assert!(context.contains(&config.store.address));
        assert!(context.contains("\"item_added\" requires cartItems"));
        assert!(context.contains("show_total"));
    }

    #[test]
    fn test_discounts_rendered_with_percentages() {
        let config = StylistConfig::built_in().unwrap();
        let context = full_system_context(&config.catalog, &config.store);
        assert!(context.contains("Black Designer Punjabi - ₹957 (20% off, was ₹1199)"));
    }

    #[test]
    fn test_builder_sections_are_independent() {
        let config = StylistConfig::built_in().unwrap();
        let context = SystemContextBuilder::new(&config.catalog, &config.store)
            .with_catalog()
            .build();
        assert!(context.contains("## Catalog"));
        assert!(!context.contains("## Store"));
    }
}
