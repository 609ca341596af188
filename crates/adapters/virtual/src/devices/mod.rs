//! Simulated pool equipment, one module per entity domain.
//!
//! Each module seeds demo entities and applies the services its domain
//! accepts. Handlers return whether the entity state actually changed.

mod climate;
mod select;
mod switch;
mod water_heater;

use poolcard_domain::entity::{Domain, EntityState};
use poolcard_domain::service::ServiceCall;

use crate::error::VirtualPoolError;

pub(crate) use climate::heater;
pub(crate) use select::{cleaner_valve, favourite, pool_spa};
pub(crate) use switch::{filter_pump, pool_lights, waterfall};
pub(crate) use water_heater::solar;

/// Apply `call` to `state`, an entity of `domain`.
pub(crate) fn apply(
    domain: Domain,
    entity_id: &str,
    state: &mut EntityState,
    call: &ServiceCall,
) -> Result<bool, VirtualPoolError> {
    if domain.as_str() != Some(call.domain) {
        return Err(unsupported(entity_id, call));
    }
    match domain {
        Domain::Switch | Domain::Light => switch::handle(entity_id, state, call),
        Domain::Select => select::handle(entity_id, state, call),
        Domain::Climate => climate::handle(entity_id, state, call),
        Domain::WaterHeater => water_heater::handle(entity_id, state, call),
        Domain::Unsupported => Err(unsupported(entity_id, call)),
    }
}

pub(crate) fn unsupported(entity_id: &str, call: &ServiceCall) -> VirtualPoolError {
    VirtualPoolError::UnsupportedService {
        entity_id: entity_id.to_string(),
        domain: call.domain,
        service: call.service,
    }
}

/// Pick `value` if `state` declares it under `list_key`.
pub(crate) fn require_declared(
    entity_id: &str,
    state: &EntityState,
    list_key: &str,
    value: &str,
) -> Result<(), VirtualPoolError> {
    let declared = state.list_attribute(list_key).unwrap_or_default();
    if declared.iter().any(|v| v == value) {
        Ok(())
    } else {
        Err(VirtualPoolError::InvalidOption {
            entity_id: entity_id.to_string(),
            value: value.to_string(),
        })
    }
}

/// Store a new target temperature after checking the declared bounds.
pub(crate) fn set_target_temperature(
    state: &mut EntityState,
    call: &ServiceCall,
) -> Result<bool, VirtualPoolError> {
    let value = call
        .number_field("temperature")
        .ok_or(VirtualPoolError::MissingField("temperature"))?;
    let min = state.number_attribute("min_temp").unwrap_or(f64::MIN);
    let max = state.number_attribute("max_temp").unwrap_or(f64::MAX);
    if !(min..=max).contains(&value) {
        return Err(VirtualPoolError::TemperatureOutOfRange { value, min, max });
    }
    let changed = state.number_attribute("temperature") != Some(value);
    state.attributes.insert("temperature".to_string(), value.into());
    Ok(changed)
}

fn replace_state(state: &mut EntityState, new_state: &str) -> bool {
    if state.state == new_state {
        return false;
    }
    new_state.clone_into(&mut state.state);
    true
}
