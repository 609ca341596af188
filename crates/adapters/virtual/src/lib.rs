//! # poolcard-adapter-virtual
//!
//! Virtual pool controller that plays the host's role for demos and tests:
//! it owns the entity state, executes service calls and pushes a fresh
//! [`Snapshot`] to subscribers after every change.
//!
//! ## Provided entities ([`VirtualPool::demo`])
//!
//! | Entity ID | Behaviour |
//! |-----------|-----------|
//! | `sensor.pool_water_temperature` | Read-only temperature in °C |
//! | `select.pool_spa_selection` | `select_option` among `Pool` / `Spa` |
//! | `select.active_favourite` | `select_option` among the declared favourites |
//! | `climate.heater` | `set_hvac_mode` (`off` / `heat`), `set_temperature` |
//! | `water_heater.solar` | `set_operation_mode` (`Off` / `Auto` / `On`), `set_temperature` |
//! | `switch.filter_pump`, `switch.waterfall` | `toggle` |
//! | `select.cleaner_valve_mode` | `select_option` among `Off` / `Auto` / `On` |
//! | `light.pool_lights` | `toggle` |
//!
//! ## Dependency rule
//!
//! Depends on `poolcard-app` (port traits) and `poolcard-domain` only.

mod devices;
pub mod error;

use poolcard_app::ports::ServiceCaller;
use poolcard_domain::entity::{EntityState, Snapshot};
use poolcard_domain::id::EntityId;
use poolcard_domain::service::ServiceCall;
use tokio::sync::watch;

pub use error::VirtualPoolError;

/// In-memory pool controller.
///
/// State lives in a [`watch`] channel: every applied change is published to
/// all receivers obtained through [`subscribe`](Self::subscribe).
pub struct VirtualPool {
    sender: watch::Sender<Snapshot>,
}

impl Default for VirtualPool {
    fn default() -> Self {
        Self::new(Snapshot::new())
    }
}

impl VirtualPool {
    /// Start from an arbitrary snapshot.
    #[must_use]
    pub fn new(snapshot: Snapshot) -> Self {
        let (sender, _) = watch::channel(snapshot);
        Self { sender }
    }

    /// A pool controller with a heater, solar, two channels, a valve and lights.
    #[must_use]
    pub fn demo() -> Self {
        let water_temperature = (
            "sensor.pool_water_temperature",
            EntityState::new("27.5")
                .with_attribute("friendly_name", "Pool Water Temperature")
                .with_attribute("unit_of_measurement", "°C")
                .with_attribute("icon", "mdi:thermometer"),
        );
        let snapshot = [
            water_temperature,
            devices::pool_spa(),
            devices::favourite(),
            devices::heater(),
            devices::solar(),
            devices::filter_pump(),
            devices::waterfall(),
            devices::cleaner_valve(),
            devices::pool_lights(),
        ]
        .into_iter()
        .map(|(id, state)| (EntityId::from(id), state))
        .collect();
        Self::new(snapshot)
    }

    /// Current state of every entity.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.sender.borrow().clone()
    }

    /// Receive every snapshot published after this call.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.sender.subscribe()
    }

    /// Replace the state of one entity, as the hardware side would when a
    /// reading changes.
    pub fn set_state(&self, entity_id: impl Into<EntityId>, state: EntityState) {
        let entity_id = entity_id.into();
        tracing::debug!(%entity_id, state = %state.state, "entity state replaced");
        self.sender.send_modify(|snapshot| {
            snapshot.insert(entity_id, state);
        });
    }

    /// Remove an entity, making it unavailable to the card.
    pub fn remove(&self, entity_id: &str) -> Option<EntityState> {
        let mut removed = None;
        self.sender.send_if_modified(|snapshot| {
            removed = snapshot.remove(entity_id);
            removed.is_some()
        });
        removed
    }

    fn apply(&self, call: &ServiceCall) -> Result<(), VirtualPoolError> {
        let entity_id = call
            .entity_id()
            .ok_or(VirtualPoolError::MissingField("entity_id"))?;
        let domain = EntityId::from(entity_id).domain();

        let mut outcome = Ok(());
        self.sender.send_if_modified(|snapshot| {
            let Some(state) = snapshot.get_mut(entity_id) else {
                outcome = Err(VirtualPoolError::UnknownEntity(entity_id.to_string()));
                return false;
            };
            match devices::apply(domain, entity_id, state, call) {
                Ok(changed) => changed,
                Err(err) => {
                    outcome = Err(err);
                    false
                }
            }
        });
        outcome
    }
}

impl ServiceCaller for VirtualPool {
    type Outcome = Result<(), VirtualPoolError>;

    fn call_service(&self, call: ServiceCall) -> Self::Outcome {
        match self.apply(&call) {
            Ok(()) => {
                tracing::debug!(
                    entity_id = call.entity_id().unwrap_or_default(),
                    service = %call,
                    "service call applied"
                );
                Ok(())
            }
            Err(err) => {
                tracing::warn!(service = %call, error = %err, "service call rejected");
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toggle(entity_id: &str) -> ServiceCall {
        let id = EntityId::from(entity_id);
        ServiceCall::new(id.domain().as_str().unwrap_or("switch"), "toggle", &id)
    }

    #[test]
    fn should_seed_demo_entities() {
        let pool = VirtualPool::demo();
        let snapshot = pool.snapshot();
        assert_eq!(snapshot.len(), 9);
        assert!(snapshot.get("switch.filter_pump").is_some_and(EntityState::is_on));
        assert_eq!(
            snapshot
                .get("sensor.pool_water_temperature")
                .map(EntityState::formatted)
                .as_deref(),
            Some("27.5 °C")
        );
    }

    #[test]
    fn should_apply_toggle_to_snapshot() {
        let pool = VirtualPool::demo();
        pool.call_service(toggle("light.pool_lights")).unwrap();
        assert!(pool.snapshot().get("light.pool_lights").is_some_and(EntityState::is_on));
    }

    #[test]
    fn should_reject_unknown_entity() {
        let pool = VirtualPool::demo();
        assert_eq!(
            pool.call_service(toggle("switch.jets")),
            Err(VirtualPoolError::UnknownEntity("switch.jets".to_string()))
        );
    }

    #[test]
    fn should_reject_service_for_other_domain() {
        let pool = VirtualPool::demo();
        let call = ServiceCall::new("light", "toggle", &EntityId::from("switch.filter_pump"));
        assert!(matches!(
            pool.call_service(call),
            Err(VirtualPoolError::UnsupportedService { .. })
        ));
    }

    #[test]
    fn should_reject_services_on_read_only_sensor() {
        let pool = VirtualPool::demo();
        let call = ServiceCall::new(
            "switch",
            "toggle",
            &EntityId::from("sensor.pool_water_temperature"),
        );
        assert!(pool.call_service(call).is_err());
    }

    #[test]
    fn should_remove_entity() {
        let pool = VirtualPool::demo();
        assert!(pool.remove("switch.waterfall").is_some());
        assert!(pool.remove("switch.waterfall").is_none());
        assert!(pool.snapshot().get("switch.waterfall").is_none());
    }

    #[tokio::test]
    async fn should_push_snapshot_to_subscribers_after_change() {
        let pool = VirtualPool::demo();
        let mut rx = pool.subscribe();

        pool.call_service(toggle("switch.filter_pump")).unwrap();

        rx.changed().await.unwrap();
        assert!(!rx.borrow_and_update().get("switch.filter_pump").unwrap().is_on());
    }

    #[tokio::test]
    async fn should_not_notify_subscribers_when_call_is_rejected() {
        let pool = VirtualPool::demo();
        let rx = pool.subscribe();

        let _ = pool.call_service(toggle("switch.jets"));

        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn should_notify_when_state_is_replaced() {
        let pool = VirtualPool::demo();
        let rx = pool.subscribe();
        pool.set_state("sensor.pool_water_temperature", EntityState::new("29"));
        assert!(rx.has_changed().unwrap());
        assert_eq!(
            rx.borrow().get("sensor.pool_water_temperature").map(|s| s.state.as_str()),
            Some("29")
        );
    }
}
