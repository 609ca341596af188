//! Errors raised by the virtual pool when it rejects a service call.

/// Why a service call could not be applied.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum VirtualPoolError {
    #[error("unknown entity {0}")]
    UnknownEntity(String),
    #[error("{domain}.{service} is not supported by {entity_id}")]
    UnsupportedService {
        entity_id: String,
        domain: &'static str,
        service: &'static str,
    },
    #[error("missing field {0} in service data")]
    MissingField(&'static str),
    #[error("{value} is not one of the declared values of {entity_id}")]
    InvalidOption { entity_id: String, value: String },
    #[error("temperature {value} is outside {min}..={max}")]
    TemperatureOutOfRange { value: f64, min: f64, max: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_describe_unsupported_service() {
        let err = VirtualPoolError::UnsupportedService {
            entity_id: "sensor.t".to_string(),
            domain: "switch",
            service: "toggle",
        };
        assert_eq!(err.to_string(), "switch.toggle is not supported by sensor.t");
    }

    #[test]
    fn should_describe_out_of_range_temperature() {
        let err = VirtualPoolError::TemperatureOutOfRange {
            value: 45.0,
            min: 10.0,
            max: 40.0,
        };
        assert_eq!(err.to_string(), "temperature 45 is outside 10..=40");
    }
}
