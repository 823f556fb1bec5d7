use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::model::ValueRange;
use crate::state::AppState;

/// Slider granularity for the numeric range filters.
const SLIDER_STEP: f64 = 0.01;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let summary = state.dataset.summary().clone();
    // Edited as a copy and handed back whole.
    let mut next = state.filter.clone();
    let mut reset = false;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Month ----
            ui.strong("Month");
            egui::ComboBox::from_id_salt("month")
                .selected_text(next.month.clone())
                .show_ui(ui, |ui: &mut Ui| {
                    for month in &summary.months {
                        ui.selectable_value(&mut next.month, month.clone(), month.as_str());
                    }
                });
            ui.separator();

            // ---- Numeric ranges ----
            range_sliders(ui, "Sentiment Score", summary.sentiment_range, &mut next.sentiment);
            ui.separator();
            range_sliders(ui, "Subjectivity Score", summary.subjectivity_range, &mut next.subjectivity);
            ui.separator();

            reset = ui.button("Reset filters").clicked();
        });

    if reset {
        state.reset_filter();
    } else if next != state.filter {
        state.set_filter(next);
    }
}

/// Two sliders editing the ends of `value` within `bounds`, kept ordered.
fn range_sliders(ui: &mut Ui, label: &str, bounds: ValueRange, value: &mut ValueRange) {
    ui.strong(label);
    let lo = ui.add(
        egui::Slider::new(&mut value.min, bounds.min..=bounds.max)
            .step_by(SLIDER_STEP)
            .text("min"),
    );
    let hi = ui.add(
        egui::Slider::new(&mut value.max, bounds.min..=bounds.max)
            .step_by(SLIDER_STEP)
            .text("max"),
    );

    if lo.changed() || hi.changed() {
        *value = snap_to_bounds(*value, bounds);
    }
    if value.min > value.max {
        if lo.changed() {
            value.max = value.min;
        } else {
            value.min = value.max;
        }
    }
    ui.label(RichText::new(format!("{value}")).weak());
}

/// Stepped sliders can stop just short of a non-round dataset bound, which
/// would silently drop the extreme rows. Pull such values onto the bound.
fn snap_to_bounds(value: ValueRange, bounds: ValueRange) -> ValueRange {
    let snap = |v: f64| {
        if (v - bounds.min).abs() < SLIDER_STEP {
            bounds.min
        } else if (bounds.max - v).abs() < SLIDER_STEP {
            bounds.max
        } else {
            v
        }
    };
    ValueRange::new(snap(value.min), snap(value.max))
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} tweets loaded, {} shown, {} selected",
            state.dataset.len(),
            state.filtered_rows().len(),
            state.selected_count()
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open processed tweets")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.load_path(&path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapping_reaches_odd_bounds() {
        let bounds = ValueRange::new(-0.987, 0.993);
        let snapped = snap_to_bounds(ValueRange::new(-0.98, 0.99), bounds);
        assert_eq!(snapped, bounds);
        let inner = ValueRange::new(-0.5, 0.5);
        assert_eq!(snap_to_bounds(inner, bounds), inner);
    }
}
