//! Virtual solar water heater — `Off`/`Auto`/`On` operation modes.

use poolcard_domain::entity::{AttributeValue, EntityState};
use poolcard_domain::service::ServiceCall;

use super::{replace_state, require_declared, set_target_temperature, unsupported};
use crate::error::VirtualPoolError;

pub(crate) fn solar() -> (&'static str, EntityState) {
    (
        "water_heater.solar",
        EntityState::new("Auto")
            .with_attribute("friendly_name", "Solar")
            .with_attribute("icon", "mdi:solar-power")
            .with_attribute("operation_list", AttributeValue::list(["Off", "Auto", "On"]))
            .with_attribute("operation_mode", "Auto")
            .with_attribute("temperature", 28_i64)
            .with_attribute("min_temp", 15_i64)
            .with_attribute("max_temp", 35_i64),
    )
}

pub(super) fn handle(
    entity_id: &str,
    state: &mut EntityState,
    call: &ServiceCall,
) -> Result<bool, VirtualPoolError> {
    match call.service {
        "set_operation_mode" => {
            let mode = call
                .str_field("operation_mode")
                .ok_or(VirtualPoolError::MissingField("operation_mode"))?;
            require_declared(entity_id, state, "operation_list", mode)?;
            let previous_mode = state
                .attributes
                .insert("operation_mode".to_string(), mode.into());
            let mode_changed = previous_mode.as_ref().and_then(AttributeValue::as_str) != Some(mode);
            Ok(replace_state(state, mode) || mode_changed)
        }
        "set_temperature" => set_target_temperature(state, call),
        _ => Err(unsupported(entity_id, call)),
    }
}
