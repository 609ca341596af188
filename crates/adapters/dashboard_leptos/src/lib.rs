//! # poolcard-dashboard-leptos
//!
//! Leptos (CSR) rendering of the pool card.
//!
//! The host page loads the WASM module, calls [`mount`] with the card
//! configuration as JSON and keeps the returned [`CardHandle`] to push entity
//! snapshots and reconfigure the card. Service calls go back to the page
//! through `window.poolcardHost.callService(domain, service, data)`.

use leptos::prelude::*;
use poolcard_app::registration::CARD;
use poolcard_app::services::card_service::CardService;
use poolcard_domain::action::UserAction;
use poolcard_domain::entity::Snapshot;
use poolcard_domain::error::PoolCardError;
use poolcard_domain::view::CardView;
use wasm_bindgen::prelude::*;

mod components;
pub mod host;

pub use components::PoolCard;
use host::JsHost;

/// Reactive state shared by the mounted view and its [`CardHandle`].
#[derive(Clone, Copy)]
struct MountedCard {
    card: RwSignal<CardService<JsHost>>,
    snapshot: RwSignal<Snapshot>,
}

impl MountedCard {
    fn new(config: &serde_json::Value) -> Result<Self, PoolCardError> {
        let mut card = CardService::new(JsHost);
        card.set_config(Some(config))?;
        Ok(Self {
            card: RwSignal::new(card),
            snapshot: RwSignal::new(Snapshot::new()),
        })
    }

    /// Replace the configuration; the view only refreshes on success.
    fn set_config(self, config: &serde_json::Value) -> Result<(), PoolCardError> {
        let mut result = Ok(());
        self.card.maybe_update(|card| {
            result = card.set_config(Some(config));
            result.is_ok()
        });
        result
    }

    fn push_snapshot(self, snapshot: Snapshot) {
        self.snapshot.set(snapshot);
    }

    fn card_size(self) -> usize {
        self.card.with_untracked(|card| card.card_size())
    }

    fn dispatch(self, action: UserAction) {
        self.card.with_untracked(|card| card.dispatch(action));
    }

    fn card_view(self) -> Signal<Option<CardView>> {
        Signal::derive(move || {
            self.card
                .with(|card| self.snapshot.with(|snapshot| card.render(snapshot)))
        })
    }
}

/// Handle kept by the host page to feed the mounted card.
#[wasm_bindgen]
pub struct CardHandle {
    card: MountedCard,
}

#[wasm_bindgen]
impl CardHandle {
    /// Replace the rendered snapshot with the JSON state map `snapshot`.
    ///
    /// # Errors
    ///
    /// Returns the parse error message when `snapshot` is not a state map.
    #[wasm_bindgen(js_name = pushSnapshot)]
    pub fn push_snapshot(&self, snapshot: &str) -> Result<(), JsValue> {
        let snapshot: Snapshot = serde_json::from_str(snapshot).map_err(js_error)?;
        self.card.push_snapshot(snapshot);
        Ok(())
    }

    /// Reconfigure the mounted card. On error the previous configuration
    /// stays in place.
    ///
    /// # Errors
    ///
    /// Returns an error when `config` is not JSON or holds no configuration.
    #[wasm_bindgen(js_name = setConfig)]
    pub fn set_config(&self, config: &str) -> Result<(), JsValue> {
        let raw: serde_json::Value = serde_json::from_str(config).map_err(js_error)?;
        self.card.set_config(&raw).map_err(js_error)
    }

    /// Layout hint for the host grid, from the current configuration.
    #[wasm_bindgen(js_name = cardSize)]
    #[must_use]
    pub fn card_size(&self) -> usize {
        self.card.card_size()
    }
}

/// Mount the card at the end of `<body>`.
///
/// # Errors
///
/// Returns an error when `config` is not JSON or holds no configuration.
#[wasm_bindgen]
pub fn mount(config: &str) -> Result<CardHandle, JsValue> {
    let raw: serde_json::Value = serde_json::from_str(config).map_err(js_error)?;
    let card = MountedCard::new(&raw).map_err(js_error)?;

    let on_action = Callback::new(move |action: UserAction| card.dispatch(action));
    let card_view = card.card_view();

    leptos::mount::mount_to_body(move || view! { <PoolCard card_view on_action/> });

    Ok(CardHandle { card })
}

/// Catalog entry (`{type, name, description}`) as JSON.
#[wasm_bindgen(js_name = cardDescriptor)]
#[must_use]
pub fn card_descriptor() -> String {
    serde_json::to_string(&CARD).unwrap_or_default()
}

fn js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn should_keep_previous_config_when_reconfiguration_fails() {
        let owner = Owner::new();
        owner.set();

        let card = MountedCard::new(&json!({"title": "Pool"})).unwrap();
        assert!(card.set_config(&serde_json::Value::Null).is_err());

        let view = card.card_view().get_untracked().unwrap();
        assert_eq!(view.title, "Pool");
    }

    #[test]
    fn should_render_and_size_from_latest_config() {
        let owner = Owner::new();
        owner.set();

        let card = MountedCard::new(&json!({"title": "Pool"})).unwrap();
        assert_eq!(card.card_size(), 3);

        card.set_config(&json!({
            "title": "Spa",
            "channels": ["switch.a", "switch.b", "switch.c"]
        }))
        .unwrap();

        assert_eq!(card.card_size(), 5);
        let view = card.card_view().get_untracked().unwrap();
        assert_eq!(view.title, "Spa");
        assert_eq!(view.sections.len(), 1);
    }

    #[test]
    fn should_render_pushed_snapshot() {
        let owner = Owner::new();
        owner.set();

        let card = MountedCard::new(&json!({"temperature": "sensor.t"})).unwrap();
        card.push_snapshot(serde_json::from_value(json!({"sensor.t": {"state": "28"}})).unwrap());

        let view = card.card_view().get_untracked().unwrap();
        assert_eq!(view.temperature, "28");
    }
}
