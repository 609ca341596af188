//! Service call — one outbound command addressed to the host.
//!
//! Examples: `switch.toggle`, `select.select_option`, `climate.set_temperature`.

use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::id::EntityId;

/// A service invocation: domain, service name and a payload that always
/// carries the target `entity_id`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceCall {
    pub domain: &'static str,
    pub service: &'static str,
    pub data: Map<String, Value>,
}

impl ServiceCall {
    /// Create a call targeting `entity_id`.
    #[must_use]
    pub fn new(domain: &'static str, service: &'static str, entity_id: &EntityId) -> Self {
        let mut data = Map::new();
        data.insert("entity_id".to_string(), Value::String(entity_id.to_string()));
        Self {
            domain,
            service,
            data,
        }
    }

    /// Add a payload field.
    #[must_use]
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.data.insert(key.to_string(), value.into());
        self
    }

    /// The targeted entity identifier.
    #[must_use]
    pub fn entity_id(&self) -> Option<&str> {
        self.data.get("entity_id").and_then(Value::as_str)
    }

    /// Text payload field.
    #[must_use]
    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.data.get(key).and_then(Value::as_str)
    }

    /// Numeric payload field.
    #[must_use]
    pub fn number_field(&self, key: &str) -> Option<f64> {
        self.data.get(key).and_then(Value::as_f64)
    }
}

impl fmt::Display for ServiceCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.domain, self.service)
    }
}
