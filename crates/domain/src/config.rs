//! Card configuration — normalization of the loosely-typed dashboard settings.
//!
//! Dashboards hand the card an arbitrary settings object (usually parsed
//! from YAML). [`CardConfig::from_value`] turns it into a canonical record:
//! list entries become [`Item`]s, malformed entries are dropped, missing
//! fields fall back to defaults. Unrecognized fields are ignored.

use serde::Serialize;
use serde_json::Value;

use crate::error::{ConfigurationError, PoolCardError};
use crate::id::EntityId;

/// Title shown when the configuration does not provide one.
pub const DEFAULT_TITLE: &str = "ConnectMyPool";

/// One configured row: an entity plus optional display overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    pub entity: EntityId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Item {
    #[must_use]
    pub fn new(entity: impl Into<EntityId>) -> Self {
        Self {
            entity: entity.into(),
            name: None,
            icon: None,
        }
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Normalize one raw list entry.
    ///
    /// A non-empty string becomes `{entity: <string>}`; an object with a
    /// non-empty string `entity` keeps its `entity`, `name` and `icon`.
    /// Anything else yields `None`.
    #[must_use]
    pub fn normalize(raw: &Value) -> Option<Self> {
        match raw {
            Value::String(entity) if !entity.is_empty() => Some(Self::new(entity.as_str())),
            Value::Object(fields) => {
                let entity = non_empty_str(fields.get("entity"))?;
                Some(Self {
                    entity: EntityId::from(entity),
                    name: non_empty_str(fields.get("name")).map(str::to_string),
                    icon: non_empty_str(fields.get("icon")).map(str::to_string),
                })
            }
            _ => None,
        }
    }
}

/// Card sections, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Heater,
    Solar,
    Channels,
    Valves,
    Lights,
    Extra,
}

impl SectionKind {
    /// Every section in the order the card renders them.
    pub const ALL: [Self; 6] = [
        Self::Heater,
        Self::Solar,
        Self::Channels,
        Self::Valves,
        Self::Lights,
        Self::Extra,
    ];

    /// Heading displayed above the section.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Heater => "Heater",
            Self::Solar => "Solar",
            Self::Channels => "Channels",
            Self::Valves => "Valves",
            Self::Lights => "Lights",
            Self::Extra => "Extra",
        }
    }
}

/// Canonical card configuration.
///
/// Built once per reconfiguration and replaced wholesale afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardConfig {
    pub title: String,
    pub temperature: Option<EntityId>,
    pub pool_spa: Option<EntityId>,
    pub favourite: Option<EntityId>,
    pub heater: Option<Item>,
    pub solar: Option<Item>,
    pub channels: Vec<Item>,
    pub valves: Vec<Item>,
    pub lights: Vec<Item>,
    pub extra: Vec<Item>,
}

impl CardConfig {
    /// Normalize a raw settings object.
    ///
    /// Other non-empty values are read as an object without fields.
    ///
    /// # Errors
    ///
    /// Returns [`PoolCardError::InvalidConfiguration`] when `raw` is absent
    /// or empty: `null`, `false`, `0` or `""`.
    pub fn from_value(raw: Option<&Value>) -> Result<Self, PoolCardError> {
        let Some(raw) = raw.filter(|value| !is_empty_value(value)) else {
            return Err(ConfigurationError::Missing.into());
        };
        let fields = raw.as_object();
        let field = |key: &str| fields.and_then(|f| f.get(key));

        Ok(Self {
            title: field("title")
                .and_then(title_text)
                .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            temperature: non_empty_str(field("temperature")).map(EntityId::from),
            pool_spa: non_empty_str(field("pool_spa")).map(EntityId::from),
            favourite: non_empty_str(field("favourite")).map(EntityId::from),
            heater: field("heater").and_then(Item::normalize),
            solar: field("solar").and_then(Item::normalize),
            channels: normalize_list(field("channels")),
            valves: normalize_list(field("valves")),
            lights: normalize_list(field("lights")),
            extra: normalize_list(field("extra")),
        })
    }

    /// Items rendered in `section`, in configured order.
    #[must_use]
    pub fn section_items(&self, section: SectionKind) -> &[Item] {
        match section {
            SectionKind::Heater => self.heater.as_slice(),
            SectionKind::Solar => self.solar.as_slice(),
            SectionKind::Channels => &self.channels,
            SectionKind::Valves => &self.valves,
            SectionKind::Lights => &self.lights,
            SectionKind::Extra => &self.extra,
        }
    }

    /// Total number of entries across the four item lists.
    #[must_use]
    pub fn list_item_count(&self) -> usize {
        self.channels.len() + self.valves.len() + self.lights.len() + self.extra.len()
    }

    /// Layout hint for the host: three rows of chrome plus one row per
    /// pair of list items.
    #[must_use]
    pub fn card_size(&self) -> usize {
        3 + self.list_item_count().div_ceil(2)
    }
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => true,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Scalar titles are shown as written; lists and objects are ignored.
fn title_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

fn normalize_list(raw: Option<&Value>) -> Vec<Item> {
    raw.and_then(Value::as_array)
        .map(|entries| entries.iter().filter_map(Item::normalize).collect())
        .unwrap_or_default()
}
