use leptos::prelude::*;
use poolcard_domain::action::UserAction;
use poolcard_domain::id::EntityId;
use poolcard_domain::view::{Control, ModeButton, ModeControl, SelectControl, TargetRange};

#[component]
pub fn ControlView(
    entity_id: EntityId,
    control: Control,
    on_action: Callback<UserAction>,
) -> impl IntoView {
    match control {
        Control::None => ().into_any(),
        Control::Toggle(toggle) => view! {
            <button
                class="btn"
                class:active=toggle.active
                on:click=move |_| on_action.run(UserAction::Toggle { entity: entity_id.clone() })
            >
                {toggle.label()}
            </button>
        }
        .into_any(),
        Control::Select(select) => view! { <SelectView entity_id select on_action/> }.into_any(),
        Control::Climate(modes) | Control::WaterHeater(modes) => {
            view! { <ModeView entity_id modes on_action/> }.into_any()
        }
    }
}

#[component]
fn SelectView(
    entity_id: EntityId,
    select: SelectControl,
    on_action: Callback<UserAction>,
) -> impl IntoView {
    let SelectControl { current, options } = select;
    let options = options
        .into_iter()
        .map(|option| {
            let selected = option == current;
            view! { <option value=option.clone() selected=selected>{option}</option> }
        })
        .collect_view();

    view! {
        <select
            class="select"
            on:change=move |ev| {
                on_action.run(UserAction::SelectOption {
                    entity: entity_id.clone(),
                    option: event_target_value(&ev),
                });
            }
        >
            {options}
        </select>
    }
}

#[component]
fn ModeView(entity_id: EntityId, modes: ModeControl, on_action: Callback<UserAction>) -> impl IntoView {
    let ModeControl { modes, target } = modes;

    let buttons = modes
        .into_iter()
        .filter_map(|ModeButton { mode, active }| {
            let action = UserAction::set_mode(entity_id.clone(), mode.clone())?;
            Some(view! {
                <button class="btn" class:active=active on:click=move |_| on_action.run(action.clone())>
                    {mode}
                </button>
            })
        })
        .collect_view();
    let slider = target.map(|target| view! { <TargetSlider entity_id target on_action/> });

    view! {
        {buttons}
        {slider}
    }
}

#[component]
fn TargetSlider(
    entity_id: EntityId,
    target: TargetRange,
    on_action: Callback<UserAction>,
) -> impl IntoView {
    let on_change = move |ev: leptos::ev::Event| {
        let Ok(temperature) = event_target_value(&ev).parse::<f64>() else {
            leptos::logging::warn!("Ignoring non-numeric slider value");
            return;
        };
        if let Some(action) = UserAction::set_temperature(entity_id.clone(), temperature) {
            on_action.run(action);
        }
    };

    view! {
        <input
            class="slider"
            type="range"
            min=target.min.to_string()
            max=target.max.to_string()
            step=target.step.to_string()
            prop:value=target.value.to_string()
            on:change=on_change
        />
    }
}
