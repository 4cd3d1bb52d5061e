//! Conversation layer for the stylist assistant.
//!
//! Three pieces, composed in order. [`engine::LocalResponseEngine`] is the
//! keyword rule cascade that answers common storefront messages at zero
//! cost. [`session::StylistSession`] holds one shopper's turn log, cart,
//! and shopping stage, and owns the authoritative totals. [`stylist::Stylist`]
//! ties them together and routes unmatched messages to the remote fallback
//! engine when one is configured.

pub mod engine;
pub mod session;
pub mod stylist;

pub use engine::{EngineConfig, LocalResponseEngine};
pub use session::StylistSession;
pub use stylist::Stylist;
