//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the card and its host. They are defined
//! here (in `app`) so that both the use-case layer and the adapter layer can
//! depend on them without creating circular dependencies.

pub mod service_caller;

pub use service_caller::ServiceCaller;
