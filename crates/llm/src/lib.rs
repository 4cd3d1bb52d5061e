//! Remote fallback engine for the stylist assistant.
//!
//! The local rule cascade answers most messages at zero cost; whatever it
//! declines is forwarded here. The hosted model receives the full catalog
//! and store knowledge as system context and must answer in the flat
//! wire-reply JSON. Every failure mode (timeout, auth, network, malformed
//! reply) surfaces as a `FallbackError` so the caller can degrade to the
//! canned apology instead of showing the user an error.

pub mod backend;
pub mod prompt;

pub use backend::{FallbackEngine, GeminiBackend};
pub use prompt::{full_system_context, SystemContextBuilder};

use thiserror::Error;

/// Remote-engine errors
#[derive(Error, Debug)]
pub enum FallbackError {
    #[error("Fallback disabled: no API key configured")]
    Disabled,

    #[error("API error: HTTP {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid reply: {0}")]
    InvalidReply(String),

    #[error("Timeout")]
    Timeout,
}

impl From<reqwest::Error> for FallbackError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FallbackError::Timeout
        } else {
            FallbackError::Network(err.to_string())
        }
    }
}
