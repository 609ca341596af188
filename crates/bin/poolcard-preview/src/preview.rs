//! Plain-text rendering of a [`CardView`], for terminals and logs.

use std::fmt::Write;

use poolcard_domain::view::{CardView, Chip, Control, ModeControl, Row};

/// Render the card as a block of text, one line per row.
#[must_use]
pub fn render_text(view: &CardView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== {} == {}", view.title, view.temperature);

    if !view.chips.is_empty() {
        let chips: Vec<String> = view.chips.iter().map(chip).collect();
        let _ = writeln!(out, "{}", chips.join(" "));
    }

    for section in &view.sections {
        let _ = writeln!(out, "\n{}", section.title());
        for row in &section.rows {
            let _ = writeln!(out, "  {}", render_row(row));
        }
    }
    out
}

fn chip(chip: &Chip) -> String {
    match &chip.value {
        Some(value) => format!("[{}: {value}]", chip.label),
        None => format!("[{}: (unavailable)]", chip.label),
    }
}

fn render_row(row: &Row) -> String {
    let mut line = format!("{:<16} {:<24} {}", row.icon, row.name, row.state);
    if row.control.is_interactive() {
        line.push_str("  | ");
        line.push_str(&render_control(&row.control));
    }
    line
}

fn render_control(control: &Control) -> String {
    match control {
        Control::None => String::new(),
        Control::Toggle(toggle) => button(toggle.label(), toggle.active),
        Control::Select(select) => {
            let options: Vec<String> = select
                .options
                .iter()
                .map(|option| button(option, *option == select.current))
                .collect();
            options.join(" ")
        }
        Control::Climate(modes) | Control::WaterHeater(modes) => render_modes(modes),
    }
}

fn render_modes(control: &ModeControl) -> String {
    let mut parts: Vec<String> = control
        .modes
        .iter()
        .map(|mode| button(&mode.mode, mode.active))
        .collect();
    if let Some(target) = control.target {
        parts.push(format!(
            "target {} ({}..{}, step {})",
            target.value, target.min, target.max, target.step
        ));
    }
    parts.join(" ")
}

fn button(label: &str, active: bool) -> String {
    if active {
        format!("<{label}>")
    } else {
        format!("[{label}]")
    }
}
