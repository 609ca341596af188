//! Entity — the host-owned state of a single observable/controllable unit.
//!
//! The card never owns or mutates entity state. On every render pass it
//! looks entities up by identifier in a fresh [`Snapshot`] pushed by the host.

mod attribute_value;
mod domain;
mod snapshot;
mod state;

pub use attribute_value::AttributeValue;
pub use domain::Domain;
pub use snapshot::Snapshot;
pub use state::{Attributes, EntityState, STATE_ON, STATE_UNAVAILABLE, STATE_UNKNOWN};
