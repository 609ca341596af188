//! View — the read-only display tree of the card.
//!
//! [`CardView::build`] is a pure function of the configuration and the
//! current snapshot. It is recomputed in full on every snapshot push and
//! knows nothing about the technology that eventually draws it.

mod control;

pub use control::{
    Control, DEFAULT_MAX_TEMP, DEFAULT_MIN_TEMP, ModeButton, ModeControl, SelectControl,
    TargetRange, Toggle,
};

use serde::Serialize;

use crate::config::{CardConfig, Item, SectionKind};
use crate::entity::{EntityState, Snapshot, STATE_UNAVAILABLE};
use crate::id::EntityId;

/// Header text shown when no temperature entity is configured.
pub const NO_TEMPERATURE: &str = "\u{2014}";
/// Icon used when neither the item nor the entity provides one.
pub const DEFAULT_ICON: &str = "mdi:pool";

/// Complete display tree of the card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardView {
    pub title: String,
    /// Formatted water temperature, or [`NO_TEMPERATURE`].
    pub temperature: String,
    pub chips: Vec<Chip>,
    /// Non-empty sections, in [`SectionKind::ALL`] order.
    pub sections: Vec<Section>,
}

/// Small status pill under the header (pool/spa mode, favourite).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chip {
    pub label: &'static str,
    /// Raw state of the entity; `None` renders a muted "unavailable" marker.
    pub value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub kind: SectionKind,
    pub rows: Vec<Row>,
}

impl Section {
    #[must_use]
    pub fn title(&self) -> &'static str {
        self.kind.title()
    }
}

/// One entity line: icon, name, state text and its control.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    pub entity_id: EntityId,
    pub icon: String,
    pub name: String,
    pub state: String,
    pub control: Control,
}

impl CardView {
    /// Map the configuration and snapshot to a display tree.
    #[must_use]
    pub fn build(config: &CardConfig, snapshot: &Snapshot) -> Self {
        let temperature = config.temperature.as_ref().map_or_else(
            || NO_TEMPERATURE.to_string(),
            |id| format_state(snapshot.get(id.as_str())),
        );

        let chips = [("Mode", &config.pool_spa), ("Favourite", &config.favourite)]
            .into_iter()
            .filter_map(|(label, entity)| {
                let entity = entity.as_ref()?;
                Some(Chip {
                    label,
                    value: snapshot.get(entity.as_str()).map(|s| s.state.clone()),
                })
            })
            .collect();

        let sections = SectionKind::ALL
            .into_iter()
            .filter_map(|kind| {
                let items = config.section_items(kind);
                if items.is_empty() {
                    return None;
                }
                Some(Section {
                    kind,
                    rows: items.iter().map(|item| Row::build(item, snapshot)).collect(),
                })
            })
            .collect();

        Self {
            title: config.title.clone(),
            temperature,
            chips,
            sections,
        }
    }

    /// Find a row by entity across all sections.
    #[must_use]
    pub fn row(&self, entity_id: &str) -> Option<&Row> {
        self.sections
            .iter()
            .flat_map(|section| &section.rows)
            .find(|row| row.entity_id.as_str() == entity_id)
    }

    /// Section of the given kind, if rendered.
    #[must_use]
    pub fn section(&self, kind: SectionKind) -> Option<&Section> {
        self.sections.iter().find(|section| section.kind == kind)
    }
}

impl Row {
    /// Build the row of `item`; entities missing from the snapshot render as
    /// "unavailable" without a control.
    #[must_use]
    pub fn build(item: &Item, snapshot: &Snapshot) -> Self {
        let state = snapshot.get(item.entity.as_str());

        let icon = item
            .icon
            .as_deref()
            .or_else(|| state.and_then(EntityState::icon))
            .unwrap_or(DEFAULT_ICON)
            .to_string();
        let name = item
            .name
            .as_deref()
            .or_else(|| state.and_then(EntityState::friendly_name))
            .map_or_else(|| item.entity.to_string(), str::to_string);
        let control = state.map_or(Control::None, |state| {
            Control::for_entity(item.entity.domain(), state)
        });

        Self {
            entity_id: item.entity.clone(),
            icon,
            name,
            state: format_state(state),
            control,
        }
    }
}

fn format_state(state: Option<&EntityState>) -> String {
    state.map_or_else(|| STATE_UNAVAILABLE.to_string(), EntityState::formatted)
}
