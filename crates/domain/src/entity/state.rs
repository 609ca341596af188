//! Entity state — the raw state string plus attributes, as pushed by the host.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};

use super::AttributeValue;

/// State reported by switches and lights that are on.
pub const STATE_ON: &str = "on";
/// Sentinel state for entities whose value is not known yet.
pub const STATE_UNKNOWN: &str = "unknown";
/// Sentinel state for entities that cannot be reached.
pub const STATE_UNAVAILABLE: &str = "unavailable";

/// Attribute map of an entity.
pub type Attributes = HashMap<String, AttributeValue>;

/// Snapshot of one entity: raw state text and its attributes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EntityState {
    pub state: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub attributes: Attributes,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Attributes, D::Error> {
    Ok(Option::<Attributes>::deserialize(deserializer)?.unwrap_or_default())
}

impl EntityState {
    /// Create a state without attributes.
    #[must_use]
    pub fn new(state: impl Into<String>) -> Self {
        Self {
            state: state.into(),
            attributes: Attributes::new(),
        }
    }

    /// Attach an attribute, replacing any previous value under `key`.
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&AttributeValue> {
        self.attributes.get(key)
    }

    /// Non-empty text attribute under `key`.
    #[must_use]
    pub fn text_attribute(&self, key: &str) -> Option<&str> {
        self.attribute(key)
            .and_then(AttributeValue::as_str)
            .filter(|s| !s.is_empty())
    }

    /// Finite numeric attribute under `key` (see [`AttributeValue::as_number`]).
    #[must_use]
    pub fn number_attribute(&self, key: &str) -> Option<f64> {
        self.attribute(key).and_then(AttributeValue::as_number)
    }

    /// List attribute under `key`; `None` when absent or not a list.
    #[must_use]
    pub fn list_attribute(&self, key: &str) -> Option<Vec<String>> {
        self.attribute(key).and_then(AttributeValue::as_string_list)
    }

    #[must_use]
    pub fn is_on(&self) -> bool {
        self.state == STATE_ON
    }

    /// Whether the state is an actual value rather than a sentinel.
    #[must_use]
    pub fn is_known(&self) -> bool {
        self.state != STATE_UNKNOWN && self.state != STATE_UNAVAILABLE
    }

    #[must_use]
    pub fn friendly_name(&self) -> Option<&str> {
        self.text_attribute("friendly_name")
    }

    #[must_use]
    pub fn icon(&self) -> Option<&str> {
        self.text_attribute("icon")
    }

    #[must_use]
    pub fn unit_of_measurement(&self) -> Option<&str> {
        self.text_attribute("unit_of_measurement")
    }

    /// State text for display: `"<state> <unit>"` when a unit is declared
    /// and the state is known, the raw state otherwise.
    #[must_use]
    pub fn formatted(&self) -> String {
        match self.unit_of_measurement() {
            Some(unit) if self.is_known() => format!("{} {unit}", self.state),
            _ => self.state.clone(),
        }
    }
}
