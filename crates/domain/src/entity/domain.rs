//! Entity domain — the prefix of an entity identifier.

use std::fmt;

/// Control family of an entity, derived from its identifier prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    Switch,
    Light,
    Select,
    Climate,
    WaterHeater,
    /// Any other domain (sensors, covers, …) or an identifier without a prefix.
    Unsupported,
}

impl Domain {
    /// Derive the domain of `entity_id` from the text before its first `.`.
    #[must_use]
    pub fn of(entity_id: &str) -> Self {
        match entity_id.split_once('.') {
            Some(("switch", _)) => Self::Switch,
            Some(("light", _)) => Self::Light,
            Some(("select", _)) => Self::Select,
            Some(("climate", _)) => Self::Climate,
            Some(("water_heater", _)) => Self::WaterHeater,
            _ => Self::Unsupported,
        }
    }

    /// Service domain name used for outbound calls.
    #[must_use]
    pub fn as_str(self) -> Option<&'static str> {
        match self {
            Self::Switch => Some("switch"),
            Self::Light => Some("light"),
            Self::Select => Some("select"),
            Self::Climate => Some("climate"),
            Self::WaterHeater => Some("water_heater"),
            Self::Unsupported => None,
        }
    }

    /// Whether the domain accepts a plain `toggle` service.
    #[must_use]
    pub fn is_toggleable(self) -> bool {
        matches!(self, Self::Switch | Self::Light)
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str().unwrap_or("unsupported"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_recognise_supported_domains() {
        assert_eq!(Domain::of("switch.pump"), Domain::Switch);
        assert_eq!(Domain::of("light.pool"), Domain::Light);
        assert_eq!(Domain::of("select.valve"), Domain::Select);
        assert_eq!(Domain::of("climate.heater"), Domain::Climate);
        assert_eq!(Domain::of("water_heater.solar"), Domain::WaterHeater);
    }

    #[test]
    fn should_fall_back_to_unsupported() {
        assert_eq!(Domain::of("sensor.temperature"), Domain::Unsupported);
        assert_eq!(Domain::of("switch"), Domain::Unsupported);
        assert_eq!(Domain::of(".switch"), Domain::Unsupported);
        assert_eq!(Domain::of(""), Domain::Unsupported);
    }

    #[test]
    fn should_only_toggle_switches_and_lights() {
        assert!(Domain::Switch.is_toggleable());
        assert!(Domain::Light.is_toggleable());
        assert!(!Domain::Select.is_toggleable());
        assert!(!Domain::Climate.is_toggleable());
    }

    #[test]
    fn should_display_service_domain_name() {
        assert_eq!(Domain::WaterHeater.to_string(), "water_heater");
        assert_eq!(Domain::Unsupported.to_string(), "unsupported");
    }
}
