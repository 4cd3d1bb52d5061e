//! The hybrid stylist: local rules first, remote model second
//!
//! Every message goes through [`LocalResponseEngine`] before anything else;
//! a matched rule never costs an API call. Only unmatched messages reach the
//! fallback engine, and when that engine is missing or fails the shopper
//! gets a localized apology instead of an error. Whatever produced the
//! reply, the session accumulator applies it and owns the final totals.

use std::sync::Arc;

use tracing::{debug, error, info};

use stylist_config::StylistConfig;
use stylist_core::{ChatRequest, Reply};
use stylist_llm::FallbackEngine;
use stylist_text_processing::detect_reply_language;

use crate::engine::{EngineConfig, LocalResponseEngine};
use crate::session::StylistSession;

/// Stateless message handler shared across sessions.
pub struct Stylist {
    bundle: Arc<StylistConfig>,
    engine: LocalResponseEngine,
    fallback: Option<Arc<dyn FallbackEngine>>,
}

impl Stylist {
    /// Local rules only; unmatched messages degrade to an apology.
    pub fn new(bundle: Arc<StylistConfig>, config: EngineConfig) -> Self {
        let engine = LocalResponseEngine::new(Arc::clone(&bundle), config);
        Self {
            bundle,
            engine,
            fallback: None,
        }
    }

    pub fn with_fallback(mut self, fallback: Arc<dyn FallbackEngine>) -> Self {
        self.fallback = Some(fallback);
        self
    }

    /// Handle one message within `session` and return the applied reply.
    ///
    /// The fallback engine sees the history as it stood before this message;
    /// on the first turn of a fresh session the request's own history (a
    /// client-restored transcript) is used instead.
    pub async fn respond(&self, session: &mut StylistSession, request: &ChatRequest) -> Reply {
        let locale = request.user_locale.as_deref();
        let history = if session.turns().is_empty() {
            request.history.clone()
        } else {
            session.history()
        };
        session.record_user(&request.message);

        if let Some(reply) = self.engine.try_local_response(&request.message) {
            debug!(action = %reply.action_type(), "message handled locally");
            return session.apply_reply(reply);
        }

        let reply = match &self.fallback {
            Some(fallback) => {
                match fallback.respond(&request.message, locale, &history).await {
                    Ok(reply) => {
                        info!(action = %reply.action_type(), "message handled by fallback engine");
                        reply
                    }
                    Err(fallback_error) => {
                        error!(error = %fallback_error, "fallback engine failed, degrading");
                        self.degraded_reply(&request.message, locale)
                    }
                }
            }
            None => {
                debug!("no fallback engine configured, degrading");
                self.degraded_reply(&request.message, locale)
            }
        };
        session.apply_reply(reply)
    }

    fn degraded_reply(&self, message: &str, locale: Option<&str>) -> Reply {
        let language = detect_reply_language(message, locale);
        Reply::General {
            response: self.bundle.templates.apology.get(language).to_string(),
            suggested_items: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use parking_lot::Mutex;

    use stylist_core::{ActionType, CartDelta, ChatTurn, ShoppingStage};
    use stylist_llm::FallbackError;

    /// Plays back a queue of canned results and counts invocations.
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

    fn bundle() -> Arc<StylistConfig> {
        Arc::new(StylistConfig::built_in().unwrap())
    }

    fn stylist() -> Stylist {
        Stylist::new(bundle(), EngineConfig::default())
    }

    #[tokio::test]
    async fn test_local_rule_short_circuits_the_fallback() {
        let fallback = ScriptedFallback::new(vec![]);
        let stylist = stylist().with_fallback(fallback.clone());
        let mut session = StylistSession::new();

        let reply = stylist
            .respond(&mut session, &ChatRequest::new("Black Designer Punjabi dao"))
            .await;

        assert_eq!(reply.action_type(), ActionType::ItemAdded);
        assert_eq!(fallback.calls(), 0);
        assert_eq!(session.cart().total_items(), 1);
    }

    #[tokio::test]
    async fn test_fallback_reply_drives_the_session() {
        let fallback = ScriptedFallback::new(vec![Ok(Reply::ShowTotal {
            response: "Your total is coming right up!".to_string(),
            cart_items: vec![],
            total_price: 0,
        })]);
        let stylist = stylist().with_fallback(fallback.clone());
        let mut session = StylistSession::new();

        stylist
            .respond(&mut session, &ChatRequest::new("Black Designer Punjabi dao"))
            .await;
        let reply = stylist
            .respond(
                &mut session,
                &ChatRequest::new("amar parcel ekhono asheni keno"),
            )
            .await;

        assert_eq!(fallback.calls(), 1);
        assert_eq!(session.stage(), ShoppingStage::ShowTotal);
        // The accumulator overrides the model's empty cart and zero total.
        assert_eq!(reply.total_price(), Some(957));
        assert_eq!(reply.cart_items().len(), 1);
    }

    #[tokio::test]
    async fn test_fallback_item_added_lands_in_the_cart() {
        let fallback = ScriptedFallback::new(vec![Ok(Reply::ItemAdded {
            response: "Jamdani Saree added!".to_string(),
            cart_items: vec![CartDelta {
                name: "Jamdani Saree".to_string(),
                price: 2999,
                quantity: 1,
            }],
            total_price: Some(2999),
            suggested_items: vec![],
        })]);
        let stylist = stylist().with_fallback(fallback.clone());
        let mut session = StylistSession::new();

        let reply = stylist
            .respond(
                &mut session,
                &ChatRequest::new("amar parcel ekhono asheni keno"),
            )
            .await;

        assert_eq!(fallback.calls(), 1);
        assert_eq!(session.stage(), ShoppingStage::ItemAdded);
        assert_eq!(session.cart().subtotal(), 2999);
        assert_eq!(reply.total_price(), Some(2999));
    }

    #[tokio::test]
    async fn test_fallback_failure_degrades_to_localized_apology() {
        let fallback = ScriptedFallback::new(vec![Err(FallbackError::Network(
            "connection refused".to_string(),
        ))]);
        let stylist = stylist().with_fallback(fallback.clone());
        let mut session = StylistSession::new();

        let mut request = ChatRequest::new("amar parcel ekhono asheni keno");
        request.user_locale = Some("bn-IN".to_string());
        let reply = stylist.respond(&mut session, &request).await;

        assert_eq!(fallback.calls(), 1);
        assert_eq!(reply.action_type(), ActionType::General);
        assert!(reply.response().contains("দুঃখিত"));
    }

    #[tokio::test]
    async fn test_no_fallback_configured_degrades_in_english() {
        let stylist = stylist();
        let mut session = StylistSession::new();

        let reply = stylist
            .respond(
                &mut session,
                &ChatRequest::new("amar parcel ekhono asheni keno"),
            )
            .await;

        assert_eq!(reply.action_type(), ActionType::General);
        assert!(reply.response().contains("Sorry"));
        assert_eq!(session.stage(), ShoppingStage::Idle);
    }

    #[tokio::test]
    async fn test_fallback_sees_history_up_to_previous_turn() {
        struct HistoryProbe {
            seen: Mutex<Vec<Vec<ChatTurn>>>,
        }

        #[async_trait]
        impl FallbackEngine for HistoryProbe {
            async fn respond(
                &self,
                _message: &str,
                _locale: Option<&str>,
                history: &[ChatTurn],
            ) -> Result<Reply, FallbackError> {
                self.seen.lock().push(history.to_vec());
                Ok(Reply::General {
                    response: "noted".to_string(),
                    suggested_items: vec![],
                })
            }
        }

        let probe = Arc::new(HistoryProbe {
            seen: Mutex::new(Vec::new()),
        });
        let stylist = stylist().with_fallback(probe.clone());
        let mut session = StylistSession::new();

        stylist
            .respond(
                &mut session,
                &ChatRequest::new("amar parcel ekhono asheni keno"),
            )
            .await;
        stylist
            .respond(
                &mut session,
                &ChatRequest::new("amar parcel ekhono asheni keno"),
            )
            .await;

        let seen = probe.seen.lock();
        assert!(seen[0].is_empty());
        // Second call sees the first exchange but not the in-flight message.
        assert_eq!(seen[1].len(), 2);
        assert_eq!(seen[1][1].content, "noted");
    }

    #[tokio::test]
    async fn test_request_history_seeds_a_fresh_session() {
        struct HistoryProbe {
            seen: Mutex<Vec<Vec<ChatTurn>>>,
        }

        #[async_trait]
        impl FallbackEngine for HistoryProbe {
            async fn respond(
                &self,
                _message: &str,
                _locale: Option<&str>,
                history: &[ChatTurn],
            ) -> Result<Reply, FallbackError> {
                self.seen.lock().push(history.to_vec());
                Ok(Reply::General {
                    response: "noted".to_string(),
                    suggested_items: vec![],
                })
            }
        }

        let probe = Arc::new(HistoryProbe {
            seen: Mutex::new(Vec::new()),
        });
        let stylist = stylist().with_fallback(probe.clone());
        let mut session = StylistSession::new();

        let mut request = ChatRequest::new("amar parcel ekhono asheni keno");
        request.history = vec![
            ChatTurn::user("hi"),
            ChatTurn::model("Welcome to TantuShree!"),
        ];
        stylist.respond(&mut session, &request).await;

        let seen = probe.seen.lock();
        assert_eq!(seen[0].len(), 2);
        assert_eq!(seen[0][0].content, "hi");
    }
}
