use leptos::prelude::*;
use poolcard_domain::action::UserAction;
use poolcard_domain::view::{CardView, Chip, Section};

use super::row::RowView;

/// Card root. Renders nothing until a configuration has been accepted.
#[component]
pub fn PoolCard(
    /// Display tree recomputed on every snapshot push.
    card_view: Signal<Option<CardView>>,
    /// Invoked for every user interaction.
    on_action: Callback<UserAction>,
) -> impl IntoView {
    view! {
        <div class="pool-card">
            {move || card_view.get().map(|card| view! { <CardBody card on_action/> })}
        </div>
    }
}

#[component]
fn CardBody(card: CardView, on_action: Callback<UserAction>) -> impl IntoView {
    let CardView {
        title,
        temperature,
        chips,
        sections,
    } = card;

    view! {
        <div class="top">
            <div class="title">{title}</div>
            <div class="temp">{temperature}</div>
        </div>
        <div class="chips">
            {chips.into_iter().map(|chip| view! { <ChipView chip/> }).collect_view()}
        </div>
        {sections
            .into_iter()
            .map(|section| view! { <SectionView section on_action/> })
            .collect_view()}
    }
}

#[component]
fn ChipView(chip: Chip) -> impl IntoView {
    match chip.value {
        Some(value) => view! { <div class="chip">{chip.label}": "{value}</div> }.into_any(),
        None => view! {
            <div class="chip">{chip.label}": "<span class="muted">"unavailable"</span></div>
        }
        .into_any(),
    }
}

#[component]
fn SectionView(section: Section, on_action: Callback<UserAction>) -> impl IntoView {
    let title = section.title();
    view! {
        <div class="section">
            <h3>{title}</h3>
            <div class="grid">
                {section
                    .rows
                    .into_iter()
                    .map(|row| view! { <RowView row on_action/> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use leptos::tachys::view::RenderHtml;
    use poolcard_domain::config::SectionKind;
    use poolcard_domain::id::EntityId;
    use poolcard_domain::view::{Control, Row};

    use super::*;

    #[test]
    fn should_wrap_section_rows_in_grid_under_heading() {
        let owner = Owner::new();
        owner.set();

        let section = Section {
            kind: SectionKind::Lights,
            rows: vec![Row {
                entity_id: EntityId::from("light.pool"),
                icon: "mdi:lightbulb".to_string(),
                name: "Pool light".to_string(),
                state: "unavailable".to_string(),
                control: Control::None,
            }],
        };
        let on_action = Callback::new(|_: UserAction| {});
        let html = view! { <SectionView section on_action/> }.to_html();

        assert!(html.contains("<h3>Lights</h3>"));
        assert!(html.contains(r#"<div class="grid">"#));
        assert!(html.contains("Pool light"));
    }
}
