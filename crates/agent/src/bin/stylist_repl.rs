//! Interactive terminal chat with the stylist assistant.
//!
//! Loads settings, assembles the domain bundle, wires the Gemini fallback
//! when an API key is configured, and runs a line-per-message loop against
//! a single session. Handy for exercising vocabulary and catalog changes
//! without a storefront client.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use stylist_agent::{EngineConfig, Stylist, StylistSession};
use stylist_config::{load_settings, Settings, StylistConfig};
use stylist_core::{format_price, ActionType, ChatRequest, Reply};
use stylist_llm::{full_system_context, GeminiBackend};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = std::env::var("STYLIST_ENV").unwrap_or_else(|_| "default".to_string());
    let settings = match load_settings(&env) {
        Ok(settings) => settings,
        Err(error) => {
            // Tracing is not up yet.
            eprintln!("Warning: failed to load config: {}. Using defaults.", error);
            Settings::default()
        }
    };
    init_tracing(&settings);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        environment = %env,
        "starting stylist REPL"
    );

    let bundle =
        Arc::new(StylistConfig::from_settings(&settings).context("loading domain data")?);

    let mut stylist = Stylist::new(Arc::clone(&bundle), EngineConfig::default());
    if settings.llm.fallback_active() {
        let system_context = full_system_context(&bundle.catalog, &bundle.store);
        match GeminiBackend::new(settings.llm.clone(), system_context) {
            Ok(backend) => {
                tracing::info!(model = %settings.llm.model, "fallback engine ready");
                stylist = stylist.with_fallback(Arc::new(backend));
            }
            Err(error) => {
                tracing::warn!(%error, "fallback engine unavailable, running local-only");
            }
        }
    } else {
        tracing::info!("no API key configured, running local-only");
    }

    let mut session = StylistSession::new();
    println!(
        "{} - {}. Type a message, or 'quit' to leave.",
        bundle.store.name, bundle.store.tagline
    );

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("you> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let message = line.trim();
        if message.is_empty() {
            continue;
        }
        if message.eq_ignore_ascii_case("quit") || message.eq_ignore_ascii_case("exit") {
            break;
        }

        let reply = stylist
            .respond(&mut session, &ChatRequest::new(message))
            .await;
        render_reply(&reply, &session);
    }

    println!("Bye!");
    Ok(())
}

/// Print a reply the way a storefront widget would lay it out: the text,
/// then cards, then suggestion chips, then cart status where relevant.
fn render_reply(reply: &Reply, session: &StylistSession) {
    println!("stylist> {}", reply.response());

    if let Reply::ProductRecommendation {
        recommended_products,
        ..
    } = reply
    {
        for card in recommended_products {
            let rating = card
                .rating
                .map(|value| format!(", {:.1} stars ({})", value, card.ratings_count.unwrap_or(0)))
                .unwrap_or_default();
            println!("  [{} {}{}]", card.name, format_price(card.price), rating);
        }
    }

    let suggestions = match reply {
        Reply::General {
            suggested_items, ..
        }
        | Reply::ProductRecommendation {
            suggested_items, ..
        }
        | Reply::ItemAdded {
            suggested_items, ..
        } => suggested_items.as_slice(),
        _ => &[],
    };
    if !suggestions.is_empty() {
        println!("  try: {}", suggestions.join(" | "));
    }

    match reply.action_type() {
        ActionType::ItemAdded | ActionType::ShowTotal => {
            println!(
                "  cart: {} item(s), subtotal {}",
                session.cart().total_items(),
                format_price(session.cart().subtotal())
            );
        }
        ActionType::AddToCart => {
            println!("{}", session.order_summary());
        }
        _ => {}
    }
}

fn init_tracing(settings: &Settings) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| settings.logging.level.clone().into());

    let subscriber = tracing_subscriber::registry().with(env_filter);
    let fmt_layer = if settings.logging.json {
        tracing_subscriber::fmt::layer().json().boxed()
    } else {
        tracing_subscriber::fmt::layer().boxed()
    };
    subscriber.with(fmt_layer).init();
}
