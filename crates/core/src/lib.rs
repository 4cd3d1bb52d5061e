//! Core types for the stylist assistant
//!
//! This crate provides the foundational types used across all other crates:
//! - Catalog types and the read-only catalog index
//! - Intent / category / attribute taxonomy and the tagger trait
//! - Reply types (tagged union plus the flat wire DTO)
//! - Conversation types (shopping stages, turns, inbound requests)
//! - Cart accumulator and order-summary rendering
//! - Error types

pub mod cart;
pub mod catalog;
pub mod conversation;
pub mod error;
pub mod intent;
pub mod reply;

pub use cart::{Cart, CartItem, OrderCharges};
pub use catalog::{format_price, CatalogIndex, Category, Product};
pub use conversation::{ChatRequest, ChatTurn, ReplyLanguage, ShoppingStage, Turn, TurnRole};
pub use error::{CatalogError, ReplyError};
pub use intent::{Attribute, CategoryKind, IntentKind, MessageTagger};
pub use reply::{ActionType, CartDelta, ChatReply, ProductCard, Reply};
