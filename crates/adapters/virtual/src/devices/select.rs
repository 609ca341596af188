//! Virtual selects — pool/spa selection, favourites and valve modes.

use poolcard_domain::entity::{AttributeValue, EntityState};
use poolcard_domain::service::ServiceCall;

use super::{replace_state, require_declared, unsupported};
use crate::error::VirtualPoolError;

pub(crate) fn pool_spa() -> (&'static str, EntityState) {
    (
        "select.pool_spa_selection",
        EntityState::new("Pool")
            .with_attribute("friendly_name", "Pool/Spa")
            .with_attribute("options", AttributeValue::list(["Pool", "Spa"])),
    )
}

pub(crate) fn favourite() -> (&'static str, EntityState) {
    (
        "select.active_favourite",
        EntityState::new("Summer")
            .with_attribute("friendly_name", "Favourite")
            .with_attribute("options", AttributeValue::list(["Summer", "Winter", "Party"])),
    )
}

pub(crate) fn cleaner_valve() -> (&'static str, EntityState) {
    (
        "select.cleaner_valve_mode",
        EntityState::new("Auto")
            .with_attribute("friendly_name", "Cleaner Valve")
            .with_attribute("icon", "mdi:valve")
            .with_attribute("options", AttributeValue::list(["Off", "Auto", "On"])),
    )
}

pub(super) fn handle(
    entity_id: &str,
    state: &mut EntityState,
    call: &ServiceCall,
) -> Result<bool, VirtualPoolError> {
    match call.service {
        "select_option" => {
            let option = call
                .str_field("option")
                .ok_or(VirtualPoolError::MissingField("option"))?;
            require_declared(entity_id, state, "options", option)?;
            Ok(replace_state(state, option))
        }
        _ => Err(unsupported(entity_id, call)),
    }
}
