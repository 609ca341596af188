use leptos::prelude::*;
use poolcard_domain::action::UserAction;
use poolcard_domain::view::Row;

use super::controls::ControlView;

#[component]
pub fn RowView(row: Row, on_action: Callback<UserAction>) -> impl IntoView {
    let Row {
        entity_id,
        icon,
        name,
        state,
        control,
    } = row;

    view! {
        <div class="row">
            <div class="left">
                <i class=icon_class(&icon)></i>
                <div class="label">
                    <div class="name" title=name.clone()>{name}</div>
                    <div class="state">{state}</div>
                </div>
            </div>
            <div class="controls">
                <ControlView entity_id control on_action/>
            </div>
        </div>
    }
}

/// Material Design Icons webfont class for an `mdi:<name>` icon.
fn icon_class(icon: &str) -> String {
    let name = icon.strip_prefix("mdi:").unwrap_or(icon);
    format!("mdi mdi-{name}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_prefixed_icon_to_webfont_class() {
        assert_eq!(icon_class("mdi:pool"), "mdi mdi-pool");
    }

    #[test]
    fn should_keep_bare_icon_name() {
        assert_eq!(icon_class("fire"), "mdi mdi-fire");
    }
}
