//! Assistant reply types: the internal tagged union and the wire DTO
//!
//! Internally every handled message produces a [`Reply`] variant carrying
//! exactly the fields that are valid for its action tag. At the boundary the
//! reply is flattened into [`ChatReply`], the camelCase JSON shape the
//! rendering layer pattern-matches on. Parsing an untrusted `ChatReply`
//! (e.g. model output) back into a `Reply` re-checks the per-tag invariants.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::error::ReplyError;

/// Action classification tag; tells the rendering layer which UI affordance
/// to show. Wire values are snake_case strings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    #[default]
    General,
    ProductRecommendation,
    Location,
    Hours,
    Contact,
    Order,
    ItemAdded,
    ShowTotal,
    AddToCart,
}

impl ActionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionType::General => "general",
            ActionType::ProductRecommendation => "product_recommendation",
            ActionType::Location => "location",
            ActionType::Hours => "hours",
            ActionType::Contact => "contact",
            ActionType::Order => "order",
            ActionType::ItemAdded => "item_added",
            ActionType::ShowTotal => "show_total",
            ActionType::AddToCart => "add_to_cart",
        }
    }
}

impl std::fmt::Display for ActionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rich product card rendered inline in the chat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCard {
    pub name: String,
    pub price: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ratings_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: product.price,
            description: (!product.description.is_empty())
                .then(|| product.description.clone()),
            rating: Some(product.rating),
            ratings_count: Some(product.ratings_count),
            image: product.primary_image().map(str::to_owned),
        }
    }
}

/// Instruction to add `quantity` of a product to the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartDelta {
    pub name: String,
    pub price: u32,
    pub quantity: u32,
}

impl CartDelta {
    pub fn line_total(&self) -> u32 {
        self.price * self.quantity
    }
}

/// A handled assistant reply, one variant per action tag.
///
/// Rule handlers return `Option<Reply>`; `None` means "not handled, escalate
/// to the fallback engine."
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    General {
        response: String,
        suggested_items: Vec<String>,
    },
    ProductRecommendation {
        response: String,
        suggested_product: Option<String>,
        suggested_items: Vec<String>,
        recommended_products: Vec<ProductCard>,
    },
    Location {
        response: String,
    },
    Hours {
        response: String,
    },
    Contact {
        response: String,
    },
    /// Mid-order conversation step; only the fallback engine produces this.
    Order {
        response: String,
    },
    ItemAdded {
        response: String,
        /// Never empty.
        cart_items: Vec<CartDelta>,
        total_price: Option<u32>,
        suggested_items: Vec<String>,
    },
    ShowTotal {
        response: String,
        cart_items: Vec<CartDelta>,
        total_price: u32,
    },
    AddToCart {
        response: String,
        total_price: u32,
    },
}

impl Reply {
    pub fn action_type(&self) -> ActionType {
        match self {
            Reply::General { .. } => ActionType::General,
            Reply::ProductRecommendation { .. } => ActionType::ProductRecommendation,
            Reply::Location { .. } => ActionType::Location,
            Reply::Hours { .. } => ActionType::Hours,
            Reply::Contact { .. } => ActionType::Contact,
            Reply::Order { .. } => ActionType::Order,
            Reply::ItemAdded { .. } => ActionType::ItemAdded,
            Reply::ShowTotal { .. } => ActionType::ShowTotal,
            Reply::AddToCart { .. } => ActionType::AddToCart,
        }
    }

    pub fn response(&self) -> &str {
        match self {
            Reply::General { response, .. }
            | Reply::ProductRecommendation { response, .. }
            | Reply::Location { response }
            | Reply::Hours { response }
            | Reply::Contact { response }
            | Reply::Order { response }
            | Reply::ItemAdded { response, .. }
            | Reply::ShowTotal { response, .. }
            | Reply::AddToCart { response, .. } => response,
        }
    }

    /// Cart deltas carried by this reply, if any.
    pub fn cart_items(&self) -> &[CartDelta] {
        match self {
            Reply::ItemAdded { cart_items, .. } | Reply::ShowTotal { cart_items, .. } => {
                cart_items
            }
            _ => &[],
        }
    }

    pub fn total_price(&self) -> Option<u32> {
        match self {
            Reply::ItemAdded { total_price, .. } => *total_price,
            Reply::ShowTotal { total_price, .. } | Reply::AddToCart { total_price, .. } => {
                Some(*total_price)
            }
            _ => None,
        }
    }
}

/// Flat wire shape of an assistant reply.
///
/// `actionType` defaults to `general` so a terse model reply that only
/// carries `response` still parses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatReply {
    pub response: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_product: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_items: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommended_products: Option<Vec<ProductCard>>,
    #[serde(default)]
    pub action_type: ActionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cart_items: Option<Vec<CartDelta>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_price: Option<u32>,
}

impl From<Reply> for ChatReply {
    fn from(reply: Reply) -> Self {
        fn some_if_filled<T>(items: Vec<T>) -> Option<Vec<T>> {
            (!items.is_empty()).then_some(items)
        }

        match reply {
            Reply::General {
                response,
                suggested_items,
            } => ChatReply {
                response,
                suggested_items: some_if_filled(suggested_items),
                action_type: ActionType::General,
                ..Default::default()
            },
            Reply::ProductRecommendation {
                response,
                suggested_product,
                suggested_items,
                recommended_products,
            } => ChatReply {
                response,
                suggested_product,
                suggested_items: some_if_filled(suggested_items),
                recommended_products: some_if_filled(recommended_products),
                action_type: ActionType::ProductRecommendation,
                ..Default::default()
            },
            Reply::Location { response } => ChatReply {
                response,
                action_type: ActionType::Location,
                ..Default::default()
            },
            Reply::Hours { response } => ChatReply {
                response,
                action_type: ActionType::Hours,
                ..Default::default()
            },
            Reply::Contact { response } => ChatReply {
                response,
                action_type: ActionType::Contact,
                ..Default::default()
            },
            Reply::Order { response } => ChatReply {
                response,
                action_type: ActionType::Order,
                ..Default::default()
            },
            Reply::ItemAdded {
                response,
                cart_items,
                total_price,
                suggested_items,
            } => ChatReply {
                response,
                suggested_items: some_if_filled(suggested_items),
                action_type: ActionType::ItemAdded,
                cart_items: Some(cart_items),
                total_price,
                ..Default::default()
            },
            Reply::ShowTotal {
                response,
                cart_items,
                total_price,
            } => ChatReply {
                response,
                action_type: ActionType::ShowTotal,
                cart_items: some_if_filled(cart_items),
                total_price: Some(total_price),
                ..Default::default()
            },
            Reply::AddToCart {
                response,
                total_price,
            } => ChatReply {
                response,
                action_type: ActionType::AddToCart,
                total_price: Some(total_price),
                ..Default::default()
            },
        }
    }
}

impl TryFrom<ChatReply> for Reply {
    type Error = ReplyError;

    fn try_from(wire: ChatReply) -> Result<Self, Self::Error> {
        let reply = match wire.action_type {
            ActionType::General => Reply::General {
                response: wire.response,
                suggested_items: wire.suggested_items.unwrap_or_default(),
            },
            ActionType::ProductRecommendation => Reply::ProductRecommendation {
                response: wire.response,
                suggested_product: wire.suggested_product,
                suggested_items: wire.suggested_items.unwrap_or_default(),
                recommended_products: wire.recommended_products.unwrap_or_default(),
            },
            ActionType::Location => Reply::Location {
                response: wire.response,
            },
            ActionType::Hours => Reply::Hours {
                response: wire.response,
            },
            ActionType::Contact => Reply::Contact {
                response: wire.response,
            },
            ActionType::Order => Reply::Order {
                response: wire.response,
            },
            ActionType::ItemAdded => {
                let cart_items = wire.cart_items.unwrap_or_default();
                if cart_items.is_empty() {
                    return Err(ReplyError::MissingCartItems);
                }
                Reply::ItemAdded {
                    response: wire.response,
                    cart_items,
                    total_price: wire.total_price,
                    suggested_items: wire.suggested_items.unwrap_or_default(),
                }
            }
            ActionType::ShowTotal => Reply::ShowTotal {
                response: wire.response,
                cart_items: wire.cart_items.unwrap_or_default(),
                total_price: wire.total_price.ok_or_else(|| ReplyError::MissingTotal {
                    action: ActionType::ShowTotal.to_string(),
                })?,
            },
            ActionType::AddToCart => Reply::AddToCart {
                response: wire.response,
                total_price: wire.total_price.ok_or_else(|| ReplyError::MissingTotal {
                    action: ActionType::AddToCart.to_string(),
                })?,
            },
        };
        Ok(reply)
    }
}
