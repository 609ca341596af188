//! Error types shared across the workspace.
//!
//! The card has a single hard failure: being set up without a configuration.
//! Every other irregularity (missing entities, malformed list entries,
//! unknown domains) degrades gracefully in the view.

/// Top-level error for card setup.
#[derive(Debug, thiserror::Error)]
pub enum PoolCardError {
    #[error("Invalid configuration")]
    InvalidConfiguration(#[from] ConfigurationError),
}

/// Reason a configuration was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("no configuration was provided")]
    Missing,
}
