//! Virtual switches and lights — respond to `toggle`.

use poolcard_domain::entity::EntityState;
use poolcard_domain::service::ServiceCall;

use super::{replace_state, unsupported};
use crate::error::VirtualPoolError;

pub(crate) fn filter_pump() -> (&'static str, EntityState) {
    (
        "switch.filter_pump",
        EntityState::new("on")
            .with_attribute("friendly_name", "Filter Pump")
            .with_attribute("icon", "mdi:pump"),
    )
}

pub(crate) fn waterfall() -> (&'static str, EntityState) {
    (
        "switch.waterfall",
        EntityState::new("off").with_attribute("friendly_name", "Waterfall"),
    )
}

pub(crate) fn pool_lights() -> (&'static str, EntityState) {
    (
        "light.pool_lights",
        EntityState::new("off")
            .with_attribute("friendly_name", "Pool Lights")
            .with_attribute("icon", "mdi:lightbulb"),
    )
}

pub(super) fn handle(
    entity_id: &str,
    state: &mut EntityState,
    call: &ServiceCall,
) -> Result<bool, VirtualPoolError> {
    match call.service {
        "toggle" => {
            let next = if state.is_on() { "off" } else { "on" };
            Ok(replace_state(state, next))
        }
        _ => Err(unsupported(entity_id, call)),
    }
}
