//! Per-conversation state: the turn log, the cart, and the shopping stage
//!
//! The session performs no message classification of its own. Whichever
//! engine handled the latest message decides the action tag; the session
//! just applies cart deltas, tracks the stage, and keeps the authoritative
//! running total. Totals carried on an incoming reply are advisory (the
//! fallback model computes its own); the accumulator's numbers win.

use stylist_core::{Cart, CartDelta, ChatReply, ChatTurn, OrderCharges, Reply, ShoppingStage, Turn};
use uuid::Uuid;

/// One shopper's conversation. Messages within a session are processed one
/// at a time, so `&mut self` is the whole concurrency story.
#[derive(Debug, Clone)]
pub struct StylistSession {
    id: String,
    stage: ShoppingStage,
    cart: Cart,
    charges: OrderCharges,
    turns: Vec<Turn>,
}

impl Default for StylistSession {
    fn default() -> Self {
        Self::new()
    }
}

impl StylistSession {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            stage: ShoppingStage::Idle,
            cart: Cart::new(),
            charges: OrderCharges::default(),
            turns: Vec::new(),
        }
    }

    /// Resume with a previously persisted cart.
    pub fn with_cart(mut self, cart: Cart) -> Self {
        self.cart = cart;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn stage(&self) -> ShoppingStage {
        self.stage
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// The conversation as role + content pairs, the shape the fallback
    /// engine takes as history.
    pub fn history(&self) -> Vec<ChatTurn> {
        self.turns.iter().map(Turn::as_chat_turn).collect()
    }

    /// Append the user's message to the turn log.
    pub fn record_user(&mut self, message: &str) {
        self.turns.push(Turn::user(message));
    }

    /// Apply a handled reply: advance the stage, fold cart deltas in, and
    /// stamp the reply's totals with the accumulator's own numbers. Returns
    /// the (possibly corrected) reply to hand to the rendering layer.
    pub fn apply_reply(&mut self, reply: Reply) -> Reply {
        if let Some(target) = ShoppingStage::for_action(reply.action_type()) {
            if !self.stage.can_transition_to(target) {
                tracing::warn!(
                    session = %self.id,
                    from = %self.stage,
                    to = %target,
                    "irregular stage transition"
                );
            }
        }

        let reply = match reply {
            Reply::ItemAdded {
                response,
                cart_items,
                suggested_items,
                ..
            } => {
                // A confirmed checkout ended the previous cycle; the next
                // add starts a fresh cart.
                if self.stage == ShoppingStage::AddToCart {
                    self.cart.clear();
                }
                for delta in &cart_items {
                    self.cart.apply_delta(delta);
                }
                self.stage = ShoppingStage::ItemAdded;
                Reply::ItemAdded {
                    response,
                    cart_items,
                    total_price: Some(self.cart.subtotal()),
                    suggested_items,
                }
            }
            Reply::ShowTotal { response, .. } => {
                self.stage = ShoppingStage::ShowTotal;
                Reply::ShowTotal {
                    response,
                    cart_items: self.cart_lines(),
                    total_price: self.cart.subtotal(),
                }
            }
            Reply::AddToCart { response, .. } => {
                self.stage = ShoppingStage::AddToCart;
                Reply::AddToCart {
                    response,
                    total_price: self.cart.subtotal(),
                }
            }
            other => other,
        };

        self.turns
            .push(Turn::model(reply.response()).with_payload(ChatReply::from(reply.clone())));
        reply
    }

    /// Current cart as delta-shaped lines, for replies that echo the cart.
    fn cart_lines(&self) -> Vec<CartDelta> {
        self.cart
            .items()
            .iter()
            .map(|item| CartDelta {
                name: item.name.clone(),
                price: item.price,
                quantity: item.quantity,
            })
            .collect()
    }

    /// Human-readable summary of the current cart with surcharges, ready
    /// for the outbound order message.
    pub fn order_summary(&self) -> String {
        self.cart.order_summary(&self.charges)
    }
}
