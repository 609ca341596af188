//! # poolcard-preview
//!
//! Composition root that wires the card to the virtual pool and renders it.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialize logging
//! - Construct the virtual pool (host side) and the card service
//! - Render the card for the current snapshot
//! - Replay scripted actions, re-rendering after each pushed snapshot
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;
mod preview;

use std::sync::Arc;

use anyhow::Context;
use poolcard_adapter_virtual::VirtualPool;
use poolcard_app::registration::CARD;
use poolcard_app::services::card_service::CardService;
use poolcard_domain::entity::Snapshot;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.logging.filter).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Host side
    let pool = Arc::new(VirtualPool::demo());
    let mut updates = pool.subscribe();

    // Card
    let mut card = CardService::new(Arc::clone(&pool));
    let card_config = config.card_value()?;
    card.set_config(Some(&card_config))?;
    tracing::info!(
        card_type = %CARD.custom_type(),
        card_size = card.card_size(),
        actions = config.preview.actions.len(),
        "card configured"
    );

    print_card(&card, &updates.borrow_and_update());

    for action in &config.preview.actions {
        match card.dispatch(action.clone()) {
            Some(Ok(())) => tracing::info!(%action, "action applied"),
            Some(Err(err)) => tracing::warn!(%action, error = %err, "action rejected by pool"),
            None => tracing::warn!(%action, "action ignored"),
        }
        if updates.has_changed().unwrap_or(false) {
            print_card(&card, &updates.borrow_and_update());
        }
    }

    Ok(())
}

fn print_card(card: &CardService<Arc<VirtualPool>>, snapshot: &Snapshot) {
    if let Some(view) = card.render(snapshot) {
        println!("{}", preview::render_text(&view));
    }
}
