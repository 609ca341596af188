//! Snapshot — the host's view of all entity states at one render pass.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::EntityState;
use crate::id::EntityId;

/// Read-only mapping from entity identifier to its current state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot(HashMap<EntityId, EntityState>);

impl Snapshot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the state of `entity_id`.
    #[must_use]
    pub fn get(&self, entity_id: &str) -> Option<&EntityState> {
        self.0.get(entity_id)
    }

    /// Mutable access, for hosts that maintain the snapshot in place.
    pub fn get_mut(&mut self, entity_id: &str) -> Option<&mut EntityState> {
        self.0.get_mut(entity_id)
    }

    /// Insert or replace the state of an entity, returning the previous one.
    pub fn insert(&mut self, entity_id: impl Into<EntityId>, state: EntityState) -> Option<EntityState> {
        self.0.insert(entity_id.into(), state)
    }

    /// Drop an entity, returning its last state.
    pub fn remove(&mut self, entity_id: &str) -> Option<EntityState> {
        self.0.remove(entity_id)
    }

    #[must_use]
    pub fn with(mut self, entity_id: impl Into<EntityId>, state: EntityState) -> Self {
        self.insert(entity_id, state);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(EntityId, EntityState)> for Snapshot {
    fn from_iter<T: IntoIterator<Item = (EntityId, EntityState)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_look_up_by_identifier_string() {
        let snapshot = Snapshot::new().with("switch.pump", EntityState::new("on"));
        assert!(snapshot.get("switch.pump").is_some_and(EntityState::is_on));
        assert!(snapshot.get("switch.other").is_none());
    }

    #[test]
    fn should_replace_previous_state_on_insert() {
        let mut snapshot = Snapshot::new().with("switch.pump", EntityState::new("on"));
        let previous = snapshot.insert("switch.pump", EntityState::new("off"));
        assert_eq!(previous.map(|s| s.state), Some("on".to_string()));
        assert_eq!(snapshot.len(), 1);
    }

    #[test]
    fn should_deserialize_from_host_state_map() {
        let snapshot: Snapshot = serde_json::from_value(serde_json::json!({
            "sensor.t": {"state": "28", "attributes": {"unit_of_measurement": "°C"}},
            "switch.pump": {"state": "on"}
        }))
        .unwrap();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.get("sensor.t").map(EntityState::formatted).as_deref(), Some("28 °C"));
    }

    #[test]
    fn should_keep_other_entities_when_one_has_null_attributes() {
        let snapshot: Snapshot = serde_json::from_value(serde_json::json!({
            "switch.pump": {"state": "on", "attributes": null},
            "sensor.t": {"state": "28", "attributes": {"unit_of_measurement": "°C"}}
        }))
        .unwrap();
        assert!(snapshot.get("switch.pump").is_some_and(EntityState::is_on));
        assert_eq!(snapshot.get("sensor.t").map(EntityState::formatted).as_deref(), Some("28 °C"));
    }
}
