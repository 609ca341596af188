//! # poolcard-domain
//!
//! Pure domain model for the pool dashboard card.
//!
//! ## Responsibilities
//! - Foundational types: entity identifiers, error conventions
//! - Define **entity snapshots** (state + attributes pushed by the host)
//! - Define the **domain** of an entity (switch, light, select, climate, …)
//! - Normalize the loosely-typed **card configuration**
//! - Map configuration + snapshot to a read-only **view** of the card
//! - Translate **user actions** into outbound **service calls**
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! The outbound call boundary is expressed as a trait in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod action;
pub mod config;
pub mod entity;
pub mod service;
pub mod view;
