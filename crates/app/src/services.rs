//! Application services (use-cases).

pub mod card_service;
