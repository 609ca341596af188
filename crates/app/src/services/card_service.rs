//! Card service — use-cases driven by the host: configure, render, dispatch.

use poolcard_domain::action::UserAction;
use poolcard_domain::config::CardConfig;
use poolcard_domain::entity::Snapshot;
use poolcard_domain::error::PoolCardError;
use poolcard_domain::id::EntityId;
use poolcard_domain::view::CardView;

use crate::ports::ServiceCaller;

/// Layout hint reported before the card has been configured.
const UNCONFIGURED_CARD_SIZE: usize = 3;

/// The pool card: holds the normalized configuration and forwards user
/// actions to the host through a [`ServiceCaller`].
///
/// Rendering is a pure function of the configuration and the snapshot the
/// host passes in; nothing derived from a snapshot is retained.
pub struct CardService<C> {
    caller: C,
    config: Option<CardConfig>,
}

impl<C: ServiceCaller> CardService<C> {
    /// Create an unconfigured card that will dispatch through `caller`.
    pub fn new(caller: C) -> Self {
        Self {
            caller,
            config: None,
        }
    }

    /// Normalize `raw` and replace the current configuration with it.
    ///
    /// On error the previous configuration is kept.
    ///
    /// # Errors
    ///
    /// Returns [`PoolCardError::InvalidConfiguration`] when `raw` is absent.
    pub fn set_config(&mut self, raw: Option<&serde_json::Value>) -> Result<(), PoolCardError> {
        let config = CardConfig::from_value(raw)?;
        tracing::debug!(
            title = %config.title,
            items = config.list_item_count(),
            "card configuration replaced"
        );
        self.config = Some(config);
        Ok(())
    }

    #[must_use]
    pub fn config(&self) -> Option<&CardConfig> {
        self.config.as_ref()
    }

    /// Estimated height for the host's layout engine.
    #[must_use]
    pub fn card_size(&self) -> usize {
        self.config
            .as_ref()
            .map_or(UNCONFIGURED_CARD_SIZE, CardConfig::card_size)
    }

    /// Build the display tree for `snapshot`; `None` until configured.
    #[must_use]
    pub fn render(&self, snapshot: &Snapshot) -> Option<CardView> {
        self.config
            .as_ref()
            .map(|config| CardView::build(config, snapshot))
    }

    /// Issue the service call for `action`.
    ///
    /// Returns the host's outcome untouched, or `None` when the action maps
    /// to no call (toggling an entity that is neither a switch nor a light).
    pub fn dispatch(&self, action: UserAction) -> Option<C::Outcome> {
        let Some(call) = action.service_call() else {
            tracing::warn!(
                entity_id = %action.entity(),
                domain = %action.entity().domain(),
                %action,
                "action has no service call"
            );
            return None;
        };
        tracing::debug!(
            entity_id = %action.entity(),
            domain = call.domain,
            service = call.service,
            "calling service"
        );
        Some(self.caller.call_service(call))
    }

    /// Toggle a switch or light.
    pub fn toggle(&self, entity: &EntityId) -> Option<C::Outcome> {
        self.dispatch(UserAction::Toggle {
            entity: entity.clone(),
        })
    }

    pub fn select_option(&self, entity: &EntityId, option: &str) -> Option<C::Outcome> {
        self.dispatch(UserAction::SelectOption {
            entity: entity.clone(),
            option: option.to_string(),
        })
    }

    pub fn set_climate_mode(&self, entity: &EntityId, mode: &str) -> Option<C::Outcome> {
        self.dispatch(UserAction::SetClimateMode {
            entity: entity.clone(),
            mode: mode.to_string(),
        })
    }

    pub fn set_climate_temperature(&self, entity: &EntityId, temperature: f64) -> Option<C::Outcome> {
        self.dispatch(UserAction::SetClimateTemperature {
            entity: entity.clone(),
            temperature,
        })
    }

    pub fn set_water_heater_mode(&self, entity: &EntityId, mode: &str) -> Option<C::Outcome> {
        self.dispatch(UserAction::SetWaterHeaterMode {
            entity: entity.clone(),
            mode: mode.to_string(),
        })
    }

    pub fn set_water_heater_temperature(
        &self,
        entity: &EntityId,
        temperature: f64,
    ) -> Option<C::Outcome> {
        self.dispatch(UserAction::SetWaterHeaterTemperature {
            entity: entity.clone(),
            temperature,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use poolcard_domain::entity::EntityState;
    use poolcard_domain::error::ConfigurationError;
    use poolcard_domain::service::ServiceCall;
    use serde_json::json;
    use std::sync::Mutex;

    /// Records every call and answers with a fixed outcome.
    #[derive(Default)]
    struct RecordingCaller {
        calls: Mutex<Vec<ServiceCall>>,
    }

    impl RecordingCaller {
        fn calls(&self) -> Vec<ServiceCall> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl ServiceCaller for RecordingCaller {
        type Outcome = Result<(), &'static str>;

        fn call_service(&self, call: ServiceCall) -> Self::Outcome {
            let rejected = call.service == "set_temperature";
            self.calls.lock().unwrap().push(call);
            if rejected { Err("rejected by host") } else { Ok(()) }
        }
    }

    fn id(s: &str) -> EntityId {
        EntityId::from(s)
    }

    #[test]
    fn should_fail_setup_without_configuration() {
        let mut card = CardService::new(RecordingCaller::default());
        let result = card.set_config(None);
        assert!(matches!(
            result,
            Err(PoolCardError::InvalidConfiguration(ConfigurationError::Missing))
        ));
        assert!(card.config().is_none());
    }

    #[test]
    fn should_keep_previous_configuration_when_reconfiguration_fails() {
        let mut card = CardService::new(RecordingCaller::default());
        card.set_config(Some(&json!({"title": "Pool"}))).unwrap();
        assert!(card.set_config(Some(&serde_json::Value::Null)).is_err());
        assert_eq!(card.config().map(|c| c.title.as_str()), Some("Pool"));
    }

    #[test]
    fn should_replace_configuration_wholesale() {
        let mut card = CardService::new(RecordingCaller::default());
        card.set_config(Some(&json!({"title": "Pool", "channels": ["switch.a"]})))
            .unwrap();
        card.set_config(Some(&json!({"lights": ["light.a"]}))).unwrap();
        let config = card.config().unwrap();
        assert_eq!(config.title, "ConnectMyPool");
        assert!(config.channels.is_empty());
        assert_eq!(config.lights.len(), 1);
    }

    #[test]
    fn should_not_render_before_configuration() {
        let card = CardService::new(RecordingCaller::default());
        assert!(card.render(&Snapshot::new()).is_none());
        assert_eq!(card.card_size(), 3);
    }

    #[test]
    fn should_render_configured_card() {
        let mut card = CardService::new(RecordingCaller::default());
        card.set_config(Some(&json!({"temperature": "sensor.t", "channels": ["switch.pump"]})))
            .unwrap();
        let snapshot = Snapshot::new()
            .with(
                "sensor.t",
                EntityState::new("28").with_attribute("unit_of_measurement", "°C"),
            )
            .with("switch.pump", EntityState::new("on"));
        let view = card.render(&snapshot).unwrap();
        assert_eq!(view.temperature, "28 °C");
        assert_eq!(card.card_size(), 4);
    }

    #[test]
    fn should_issue_exactly_one_call_per_action() {
        let caller = RecordingCaller::default();
        let card = CardService::new(&caller);

        assert_eq!(card.toggle(&id("switch.pump")), Some(Ok(())));
        assert_eq!(card.select_option(&id("select.valve"), "Auto"), Some(Ok(())));
        assert_eq!(card.set_climate_mode(&id("climate.heater"), "heat"), Some(Ok(())));
        assert_eq!(
            card.set_water_heater_mode(&id("water_heater.solar"), "On"),
            Some(Ok(()))
        );

        let services: Vec<_> = caller
            .calls()
            .iter()
            .map(|c| format!("{}.{}", c.domain, c.service))
            .collect();
        assert_eq!(
            services,
            vec![
                "switch.toggle",
                "select.select_option",
                "climate.set_hvac_mode",
                "water_heater.set_operation_mode",
            ]
        );
    }

    #[test]
    fn should_skip_toggle_for_non_toggleable_domain() {
        let caller = RecordingCaller::default();
        let card = CardService::new(&caller);
        assert!(card.toggle(&id("select.valve")).is_none());
        assert!(caller.calls().is_empty());
    }

    #[test]
    fn should_propagate_host_failure_untouched() {
        let caller = RecordingCaller::default();
        let card = CardService::new(&caller);
        assert_eq!(
            card.set_climate_temperature(&id("climate.heater"), 31.0),
            Some(Err("rejected by host"))
        );
        assert_eq!(
            card.set_water_heater_temperature(&id("water_heater.solar"), 29.0),
            Some(Err("rejected by host"))
        );
        assert_eq!(caller.calls().len(), 2);
    }

    #[test]
    fn should_not_change_rendered_state_after_dispatch() {
        let caller = RecordingCaller::default();
        let mut card = CardService::new(&caller);
        card.set_config(Some(&json!({"channels": ["switch.pump"]}))).unwrap();
        let snapshot = Snapshot::new().with("switch.pump", EntityState::new("off"));

        let before = card.render(&snapshot);
        card.toggle(&id("switch.pump"));
        assert_eq!(card.render(&snapshot), before);
    }
}
