//! # poolcard-app
//!
//! Application layer — the card use-case and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **outbound port** the host must implement:
//!   - `ServiceCaller` — execute one service call against the host
//! - Define the **driving** use-case:
//!   - `CardService` — configure, render, size, dispatch user actions
//! - Describe the card to the host's widget catalog (`registration`)
//!
//! ## Dependency rule
//! Depends on `poolcard-domain` only. Never imports adapter crates.
//! Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod registration;
pub mod services;
