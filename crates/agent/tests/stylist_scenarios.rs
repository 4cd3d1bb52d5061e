//! End-to-end chat scenarios through the hybrid stylist
//!
//! Each test drives a real session against the built-in catalog and
//! vocabulary; where a remote model is needed, a scripted stand-in plays
//! its part.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use stylist_agent::{EngineConfig, Stylist, StylistSession};
use stylist_config::StylistConfig;
use stylist_core::{ActionType, ChatRequest, ChatTurn, Reply, ShoppingStage};
use stylist_llm::{FallbackEngine, FallbackError};

/// Queue of canned fallback results, popped one per call.
struct ScriptedFallback {
    script: Mutex<VecDeque<Result<Reply, FallbackError>>>,
    calls: AtomicUsize,
}

impl ScriptedFallback {
    fn new(script: Vec<Result<Reply, FallbackError>>) -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(script.into()),
            calls: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FallbackEngine for ScriptedFallback {
    async fn respond(
        &self,
        _message: &str,
        _locale: Option<&str>,
        _history: &[ChatTurn],
    ) -> Result<Reply, FallbackError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.script
            .lock()
            .pop_front()
            .unwrap_or(Err(FallbackError::Disabled))
    }
}

fn local_stylist() -> Stylist {
    Stylist::new(
        Arc::new(StylistConfig::built_in().unwrap()),
        EngineConfig::default(),
    )
}

async fn say(stylist: &Stylist, session: &mut StylistSession, message: &str) -> Reply {
    stylist
        .respond(session, &ChatRequest::new(message))
        .await
}

/// A Banglish order message lands in the cart at the catalog price.
#[tokio::test]
async fn test_order_message_flows_into_the_cart() {
    let stylist = local_stylist();
    let mut session = StylistSession::new();

    let reply = say(&stylist, &mut session, "Black Designer Punjabi dao").await;

    assert_eq!(reply.action_type(), ActionType::ItemAdded);
    assert_eq!(reply.total_price(), Some(957));
    assert_eq!(session.stage(), ShoppingStage::ItemAdded);
    assert_eq!(session.cart().items()[0].name, "Black Designer Punjabi");
    assert_eq!(session.cart().items()[0].quantity, 1);
}

/// Quantity prefixes multiply the line and orders accumulate across turns.
#[tokio::test]
async fn test_orders_accumulate_across_turns() {
    let stylist = local_stylist();
    let mut session = StylistSession::new();

    let reply = say(&stylist, &mut session, "2ta Navy Blue Designer Punjabi dao").await;
    assert_eq!(reply.total_price(), Some(2 * 1047));

    let reply = say(&stylist, &mut session, "Red Katan Blouse dao").await;
    assert_eq!(reply.total_price(), Some(2 * 1047 + 349));
    assert_eq!(session.cart().total_items(), 3);
}

/// Cancellations are never handled locally; without a fallback engine the
/// shopper gets the apology rather than a wrong cart change.
#[tokio::test]
async fn test_cancellation_degrades_without_fallback() {
    let stylist = local_stylist();
    let mut session = StylistSession::new();

    say(&stylist, &mut session, "Black Designer Punjabi dao").await;
    let reply = say(&stylist, &mut session, "cancel my punjabi order").await;

    assert_eq!(reply.action_type(), ActionType::General);
    assert!(reply.response().contains("Sorry"));
    // The cart is untouched; only a real engine may change an order.
    assert_eq!(session.cart().total_items(), 1);
}

/// Cancellations reach the fallback engine when one is wired.
#[tokio::test]
async fn test_cancellation_reaches_the_fallback() {
    let fallback = ScriptedFallback::new(vec![Ok(Reply::Order {
        response: "Which order should I cancel?".to_string(),
    })]);
    let stylist = local_stylist().with_fallback(fallback.clone());
    let mut session = StylistSession::new();

    let reply = say(&stylist, &mut session, "cancel my punjabi order").await;

    assert_eq!(fallback.calls(), 1);
    assert_eq!(reply.action_type(), ActionType::Order);
}

/// Price questions answer with a single card and the discount callout.
#[tokio::test]
async fn test_price_lookup_answers_with_card() {
    let stylist = local_stylist();
    let mut session = StylistSession::new();

    let reply = say(&stylist, &mut session, "koto dam Black Designer Punjabi").await;

    let Reply::ProductRecommendation {
        response,
        suggested_product,
        recommended_products,
        ..
    } = reply
    else {
        panic!("expected a product recommendation");
    };
    assert_eq!(suggested_product.as_deref(), Some("Black Designer Punjabi"));
    assert_eq!(recommended_products.len(), 1);
    assert!(response.contains("₹957"));
}

/// Greeting introduces the store and seeds category chips.
#[tokio::test]
async fn test_greeting_seeds_browsing() {
    let stylist = local_stylist();
    let mut session = StylistSession::new();

    let reply = say(&stylist, &mut session, "hi").await;

    assert_eq!(reply.action_type(), ActionType::General);
    assert!(reply.response().contains("TantuShree"));
    let Reply::General {
        suggested_items, ..
    } = reply
    else {
        panic!("expected a general reply");
    };
    assert!(!suggested_items.is_empty());
}

/// Bengali-script browsing works end to end.
#[tokio::test]
async fn test_bengali_script_listing() {
    let stylist = local_stylist();
    let mut session = StylistSession::new();

    let reply = say(&stylist, &mut session, "শাড়ি").await;

    let Reply::ProductRecommendation {
        recommended_products,
        ..
    } = reply
    else {
        panic!("expected a product recommendation");
    };
    assert!(!recommended_products.is_empty());
}

/// A full checkout conversation: add locally, then the scripted model shows
/// the total and confirms. Stages advance along the expected path and the
/// order summary carries the accumulated cart.
#[tokio::test]
async fn test_checkout_conversation_advances_stages() {
    let fallback = ScriptedFallback::new(vec![
        Ok(Reply::ShowTotal {
            response: "Here is your total".to_string(),
            cart_items: vec![],
            total_price: 0,
        }),
        Ok(Reply::AddToCart {
            response: "Order confirmed!".to_string(),
            total_price: 0,
        }),
    ]);
    let stylist = local_stylist().with_fallback(fallback.clone());
    let mut session = StylistSession::new();

    say(&stylist, &mut session, "2ta Navy Blue Designer Punjabi dao").await;
    assert_eq!(session.stage(), ShoppingStage::ItemAdded);

    let reply = say(&stylist, &mut session, "amar parcel ekhono asheni keno").await;
    assert_eq!(session.stage(), ShoppingStage::ShowTotal);
    assert_eq!(reply.total_price(), Some(2094));
    assert_eq!(reply.cart_items().len(), 1);

    let reply = say(&stylist, &mut session, "amar parcel ekhono asheni keno").await;
    assert_eq!(session.stage(), ShoppingStage::AddToCart);
    assert_eq!(reply.total_price(), Some(2094));

    let summary = session.order_summary();
    assert!(summary.contains("Navy Blue Designer Punjabi x2"));
    assert!(summary.contains("Total: ₹2164"));
    assert_eq!(fallback.calls(), 2);
}
