//! Conversation types: shopping-flow stages, turns, and the inbound request

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::reply::{ActionType, ChatReply};

/// Stages of the checkout-oriented shopping flow.
///
/// Stage changes are driven entirely by the action tag of the reply that
/// handled the latest message; the session performs no classification of its
/// own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShoppingStage {
    /// Browsing, nothing in flight.
    #[default]
    Idle,
    /// One or more items just added; more may follow.
    ItemAdded,
    /// Running total shown, awaiting confirmation.
    ShowTotal,
    /// Checkout confirmed; terminal for this cycle.
    AddToCart,
}

/// Static transition map; the expected forward path through a checkout
/// cycle. Off-path tags are still applied (the accumulator is permissive),
/// but irregular jumps are worth logging.
static STAGE_TRANSITIONS: Lazy<HashMap<ShoppingStage, &'static [ShoppingStage]>> =
    Lazy::new(|| {
        use ShoppingStage::*;
        let mut map = HashMap::new();
        map.insert(Idle, &[ItemAdded] as &[_]);
        map.insert(ItemAdded, &[ItemAdded, ShowTotal] as &[_]);
        map.insert(ShowTotal, &[ItemAdded, AddToCart] as &[_]);
        map.insert(AddToCart, &[ItemAdded] as &[_]);
        map
    });

impl ShoppingStage {
    /// Expected next stages from the current one.
    pub fn allowed_transitions(&self) -> &'static [ShoppingStage] {
        STAGE_TRANSITIONS.get(self).copied().unwrap_or(&[])
    }

    /// Whether moving to `target` follows the expected checkout path.
    pub fn can_transition_to(&self, target: ShoppingStage) -> bool {
        self.allowed_transitions().contains(&target)
    }

    /// Stage implied by an action tag; `None` when the tag does not move
    /// the shopping flow (informational replies).
    pub fn for_action(action: ActionType) -> Option<ShoppingStage> {
        match action {
            ActionType::ItemAdded => Some(ShoppingStage::ItemAdded),
            ActionType::ShowTotal => Some(ShoppingStage::ShowTotal),
            ActionType::AddToCart => Some(ShoppingStage::AddToCart),
            _ => None,
        }
    }
}

impl std::fmt::Display for ShoppingStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShoppingStage::Idle => write!(f, "idle"),
            ShoppingStage::ItemAdded => write!(f, "item_added"),
            ShoppingStage::ShowTotal => write!(f, "show_total"),
            ShoppingStage::AddToCart => write!(f, "add_to_cart"),
        }
    }
}

/// Apparent language of the user, used to pick reply templates. Banglish
/// (Bengali in Latin letters) renders fine with English templates, so only
/// Bengali script or an explicit locale hint selects Bengali.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyLanguage {
    #[default]
    English,
    Bengali,
}

/// Role in a conversation turn. Wire values follow the fallback model's
/// convention: the assistant side is "model".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnRole {
    User,
    Model,
}

impl TurnRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            TurnRole::User => "user",
            TurnRole::Model => "model",
        }
    }
}

impl std::fmt::Display for TurnRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A role + content pair as carried in request history and sent to the
/// fallback engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: TurnRole,
    pub content: String,
}

impl ChatTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: TurnRole::User,
            content: content.into(),
        }
    }

    pub fn model(content: impl Into<String>) -> Self {
        Self {
            role: TurnRole::Model,
            content: content.into(),
        }
    }
}

/// A single turn in the session's append-only log. Never mutated after
/// creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turn {
    pub role: TurnRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    /// Structured payload of the reply that produced an assistant turn.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<ChatReply>,
}

impl Turn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: TurnRole::User,
            content: content.into(),
            timestamp: Utc::now(),
            payload: None,
        }
    }

    pub fn model(content: impl Into<String>) -> Self {
        Self {
            role: TurnRole::Model,
            content: content.into(),
            timestamp: Utc::now(),
            payload: None,
        }
    }

    pub fn with_payload(mut self, payload: ChatReply) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Project down to the role + content pair the fallback engine sees.
    pub fn as_chat_turn(&self) -> ChatTurn {
        ChatTurn {
            role: self.role,
            content: self.content.clone(),
        }
    }
}

/// Inbound chat message from the rendering layer.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: String,
    /// BCP-47-ish locale hint ("bn", "en-IN"), when the surface knows it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_locale: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub history: Vec<ChatTurn>,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            user_locale: None,
            history: Vec::new(),
        }
    }
}
