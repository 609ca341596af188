//! Card registration — how the card advertises itself to the host.

use serde::Serialize;

/// Entry in the host's widget catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CardDescriptor {
    #[serde(rename = "type")]
    pub card_type: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// Catalog entry of the pool card.
pub const CARD: CardDescriptor = CardDescriptor {
    card_type: "connectmypool-card",
    name: "ConnectMyPool Card",
    description: "A dashboard card for the ConnectMyPool integration.",
};

impl CardDescriptor {
    /// Type string users put in their dashboard configuration.
    #[must_use]
    pub fn custom_type(&self) -> String {
        format!("custom:{}", self.card_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_serialize_catalog_entry_with_type_key() {
        let json = serde_json::to_value(CARD).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "connectmypool-card",
                "name": "ConnectMyPool Card",
                "description": "A dashboard card for the ConnectMyPool integration."
            })
        );
    }

    #[test]
    fn should_prefix_custom_type() {
        assert_eq!(CARD.custom_type(), "custom:connectmypool-card");
    }
}
