//! User action — a discrete interaction with one of the card's controls.
//!
//! Each action maps to at most one [`ServiceCall`]. The card keeps no local
//! state: the effect becomes visible only once the host pushes a new snapshot.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::entity::Domain;
use crate::id::EntityId;
use crate::service::ServiceCall;

/// An interaction triggered from a row control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UserAction {
    /// Flip a switch or light.
    Toggle { entity: EntityId },
    /// Pick an option of a select entity.
    SelectOption { entity: EntityId, option: String },
    /// Change the HVAC mode of a climate entity (`off`, `heat`, `cool`).
    SetClimateMode { entity: EntityId, mode: String },
    SetClimateTemperature { entity: EntityId, temperature: f64 },
    /// Change the operation mode of a water heater (`Off`, `Auto`, `On`).
    SetWaterHeaterMode { entity: EntityId, mode: String },
    SetWaterHeaterTemperature { entity: EntityId, temperature: f64 },
}

impl UserAction {
    /// Mode change for a climate or water-heater entity, chosen by its domain.
    #[must_use]
    pub fn set_mode(entity: EntityId, mode: impl Into<String>) -> Option<Self> {
        let mode = mode.into();
        match entity.domain() {
            Domain::Climate => Some(Self::SetClimateMode { entity, mode }),
            Domain::WaterHeater => Some(Self::SetWaterHeaterMode { entity, mode }),
            Domain::Switch | Domain::Light | Domain::Select | Domain::Unsupported => None,
        }
    }

    /// Target temperature change for a climate or water-heater entity.
    #[must_use]
    pub fn set_temperature(entity: EntityId, temperature: f64) -> Option<Self> {
        match entity.domain() {
            Domain::Climate => Some(Self::SetClimateTemperature {
                entity,
                temperature,
            }),
            Domain::WaterHeater => Some(Self::SetWaterHeaterTemperature {
                entity,
                temperature,
            }),
            Domain::Switch | Domain::Light | Domain::Select | Domain::Unsupported => None,
        }
    }

    #[must_use]
    pub fn entity(&self) -> &EntityId {
        match self {
            Self::Toggle { entity }
            | Self::SelectOption { entity, .. }
            | Self::SetClimateMode { entity, .. }
            | Self::SetClimateTemperature { entity, .. }
            | Self::SetWaterHeaterMode { entity, .. }
            | Self::SetWaterHeaterTemperature { entity, .. } => entity,
        }
    }

    /// The outbound call for this action.
    ///
    /// Only toggles can map to nothing: they apply to switches and lights,
    /// and are ignored for every other domain.
    #[must_use]
    pub fn service_call(&self) -> Option<ServiceCall> {
        let call = match self {
            Self::Toggle { entity } => {
                let domain = entity.domain();
                if !domain.is_toggleable() {
                    return None;
                }
                ServiceCall::new(domain.as_str()?, "toggle", entity)
            }
            Self::SelectOption { entity, option } => {
                ServiceCall::new("select", "select_option", entity).with("option", option.as_str())
            }
            Self::SetClimateMode { entity, mode } => {
                ServiceCall::new("climate", "set_hvac_mode", entity).with("hvac_mode", mode.as_str())
            }
            Self::SetClimateTemperature {
                entity,
                temperature,
            } => ServiceCall::new("climate", "set_temperature", entity)
                .with("temperature", *temperature),
            Self::SetWaterHeaterMode { entity, mode } => {
                ServiceCall::new("water_heater", "set_operation_mode", entity)
                    .with("operation_mode", mode.as_str())
            }
            Self::SetWaterHeaterTemperature {
                entity,
                temperature,
            } => ServiceCall::new("water_heater", "set_temperature", entity)
                .with("temperature", *temperature),
        };
        Some(call)
    }
}

impl fmt::Display for UserAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Toggle { entity } => write!(f, "toggle({entity})"),
            Self::SelectOption { entity, option } => write!(f, "select_option({entity}, {option})"),
            Self::SetClimateMode { entity, mode } | Self::SetWaterHeaterMode { entity, mode } => {
                write!(f, "set_mode({entity}, {mode})")
            }
            Self::SetClimateTemperature {
                entity,
                temperature,
            }
            | Self::SetWaterHeaterTemperature {
                entity,
                temperature,
            } => write!(f, "set_temperature({entity}, {temperature})"),
        }
    }
}
