//! Virtual heater — an HVAC thermostat with `off`/`heat` modes.

use poolcard_domain::entity::{AttributeValue, EntityState};
use poolcard_domain::service::ServiceCall;

use super::{replace_state, require_declared, set_target_temperature, unsupported};
use crate::error::VirtualPoolError;

pub(crate) fn heater() -> (&'static str, EntityState) {
    (
        "climate.heater",
        EntityState::new("off")
            .with_attribute("friendly_name", "Heater")
            .with_attribute("icon", "mdi:radiator")
            .with_attribute("hvac_modes", AttributeValue::list(["off", "heat"]))
            .with_attribute("temperature", 30_i64)
            .with_attribute("min_temp", 10_i64)
            .with_attribute("max_temp", 40_i64),
    )
}

pub(super) fn handle(
    entity_id: &str,
    state: &mut EntityState,
    call: &ServiceCall,
) -> Result<bool, VirtualPoolError> {
    match call.service {
        "set_hvac_mode" => {
            let mode = call
                .str_field("hvac_mode")
                .ok_or(VirtualPoolError::MissingField("hvac_mode"))?;
            require_declared(entity_id, state, "hvac_modes", mode)?;
            Ok(replace_state(state, mode))
        }
        "set_temperature" => set_target_temperature(state, call),
        _ => Err(unsupported(entity_id, call)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use poolcard_domain::id::EntityId;

    fn call(service: &'static str) -> ServiceCall {
        ServiceCall::new("climate", service, &EntityId::from("climate.heater"))
    }

    #[test]
    fn should_switch_to_declared_mode() {
        let (id, mut state) = heater();
        assert!(handle(id, &mut state, &call("set_hvac_mode").with("hvac_mode", "heat")).unwrap());
        assert_eq!(state.state, "heat");
    }

    #[test]
    fn should_reject_undeclared_mode() {
        let (id, mut state) = heater();
        let result = handle(id, &mut state, &call("set_hvac_mode").with("hvac_mode", "cool"));
        assert!(matches!(result, Err(VirtualPoolError::InvalidOption { .. })));
    }

    #[test]
    fn should_store_target_temperature_within_bounds() {
        let (id, mut state) = heater();
        assert!(handle(id, &mut state, &call("set_temperature").with("temperature", 34.0)).unwrap());
        assert_eq!(state.number_attribute("temperature"), Some(34.0));
    }

    #[test]
    fn should_reject_target_temperature_out_of_bounds() {
        let (id, mut state) = heater();
        let result = handle(id, &mut state, &call("set_temperature").with("temperature", 45.0));
        assert_eq!(
            result,
            Err(VirtualPoolError::TemperatureOutOfRange {
                value: 45.0,
                min: 10.0,
                max: 40.0
            })
        );
        assert_eq!(state.number_attribute("temperature"), Some(30.0));
    }

    #[test]
    fn should_require_temperature_field() {
        let (id, mut state) = heater();
        assert_eq!(
            handle(id, &mut state, &call("set_temperature")),
            Err(VirtualPoolError::MissingField("temperature"))
        );
    }
}
