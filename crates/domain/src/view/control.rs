//! Per-domain row controls.

use serde::Serialize;

use crate::entity::{Domain, EntityState};

/// Lower bound of the target slider when the entity declares none.
pub const DEFAULT_MIN_TEMP: f64 = 10.0;
/// Upper bound of the target slider when the entity declares none.
pub const DEFAULT_MAX_TEMP: f64 = 40.0;

const CLIMATE_MODES: [&str; 3] = ["off", "heat", "cool"];
const CLIMATE_FALLBACK_MODES: [&str; 2] = ["off", "heat"];
const WATER_HEATER_MODES: [&str; 3] = ["Off", "Auto", "On"];

/// Interactive control attached to a row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Control {
    /// State text only.
    None,
    Toggle(Toggle),
    Select(SelectControl),
    Climate(ModeControl),
    WaterHeater(ModeControl),
}

/// On/off button of a switch or light.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Toggle {
    pub active: bool,
}

impl Toggle {
    #[must_use]
    pub fn label(self) -> &'static str {
        if self.active { "On" } else { "Off" }
    }
}

/// Drop-down bound to a select entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectControl {
    pub current: String,
    pub options: Vec<String>,
}

/// Mode buttons plus an optional target temperature slider.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModeControl {
    pub modes: Vec<ModeButton>,
    pub target: Option<TargetRange>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModeButton {
    pub mode: String,
    pub active: bool,
}

/// Ranged numeric input for a target temperature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TargetRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub value: f64,
}

impl Control {
    /// Control for an entity with a known state.
    #[must_use]
    pub fn for_entity(domain: Domain, state: &EntityState) -> Self {
        match domain {
            Domain::Switch | Domain::Light => Self::Toggle(Toggle {
                active: state.is_on(),
            }),
            Domain::Select => Self::Select(SelectControl {
                current: state.state.clone(),
                options: state.list_attribute("options").unwrap_or_default(),
            }),
            Domain::Climate => Self::Climate(ModeControl::climate(state)),
            Domain::WaterHeater => Self::WaterHeater(ModeControl::water_heater(state)),
            Domain::Unsupported => Self::None,
        }
    }

    #[must_use]
    pub fn is_interactive(&self) -> bool {
        !matches!(self, Self::None)
    }
}

impl ModeControl {
    fn climate(state: &EntityState) -> Self {
        let declared = state
            .list_attribute("hvac_modes")
            .unwrap_or_else(|| CLIMATE_FALLBACK_MODES.map(String::from).to_vec());
        let modes = supported_modes(declared, &CLIMATE_MODES)
            .map(|mode| ModeButton {
                active: mode == state.state,
                mode,
            })
            .collect();

        Self {
            modes,
            target: TargetRange::for_entity(state),
        }
    }

    fn water_heater(state: &EntityState) -> Self {
        let declared = state
            .list_attribute("operation_list")
            .or_else(|| state.list_attribute("operation_modes"))
            .unwrap_or_else(|| WATER_HEATER_MODES.map(String::from).to_vec());
        let current = state
            .text_attribute("operation_mode")
            .or_else(|| state.text_attribute("current_operation"))
            .unwrap_or(&state.state);
        let modes = supported_modes(declared, &WATER_HEATER_MODES)
            .map(|mode| ModeButton {
                active: mode == current || mode == state.state,
                mode,
            })
            .collect();

        Self {
            modes,
            target: TargetRange::for_entity(state),
        }
    }

    /// The highlighted mode, if any.
    #[must_use]
    pub fn active_mode(&self) -> Option<&str> {
        self.modes
            .iter()
            .find(|button| button.active)
            .map(|button| button.mode.as_str())
    }
}

/// Declared modes restricted to `allowed`, in declared order, without duplicates.
fn supported_modes(declared: Vec<String>, allowed: &[&str]) -> impl Iterator<Item = String> {
    let mut seen = Vec::with_capacity(allowed.len());
    declared.into_iter().filter(move |mode| {
        if !allowed.contains(&mode.as_str()) || seen.contains(mode) {
            return false;
        }
        seen.push(mode.clone());
        true
    })
}

impl TargetRange {
    /// Slider for the `temperature` attribute, present only when that
    /// attribute is numeric.
    fn for_entity(state: &EntityState) -> Option<Self> {
        let value = state.number_attribute("temperature")?;
        Some(Self {
            min: state.number_attribute("min_temp").unwrap_or(DEFAULT_MIN_TEMP),
            max: state.number_attribute("max_temp").unwrap_or(DEFAULT_MAX_TEMP),
            step: 1.0,
            value,
        })
    }
}
