use eframe::egui::{self, Layout, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::loader::RAW_TWEET;
use crate::state::AppState;

const ROW_HEIGHT: f32 = 20.0;

// ---------------------------------------------------------------------------
// Selected tweets table (bottom panel)
// ---------------------------------------------------------------------------

/// Render the paginated RawTweet table for the current lasso selection.
pub fn selection_table(ui: &mut Ui, state: &mut AppState) {
    let page = state.table_page();

    ui.horizontal(|ui: &mut Ui| {
        ui.strong(format!("Selected tweets ({})", page.total));
        if state.selection.is_some() && ui.small_button("Clear selection").clicked() {
            state.clear_selection();
        }

        ui.with_layout(Layout::right_to_left(egui::Align::Center), |ui: &mut Ui| {
            if ui
                .add_enabled(page.page + 1 < page.page_count, egui::Button::new("Next ▶"))
                .clicked()
            {
                state.next_page();
            }
            ui.label(format!("Page {} of {}", page.page + 1, page.page_count));
            if ui
                .add_enabled(page.page > 0, egui::Button::new("◀ Prev"))
                .clicked()
            {
                state.prev_page();
            }
        });
    });
    ui.separator();

    if page.texts.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            let hint = if state.selection.is_some() {
                "No tweets inside the lasso."
            } else {
                "Drag on the plot to lasso tweets."
            };
            ui.label(RichText::new(hint).weak());
        });
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .cell_layout(Layout::centered_and_justified(egui::Direction::LeftToRight))
        .column(Column::remainder())
        .header(ROW_HEIGHT, |mut header| {
            header.col(|ui| {
                ui.strong(RAW_TWEET);
            });
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, page.texts.len(), |mut row| {
                let text = &page.texts[row.index()];
                row.col(|ui| {
                    ui.add(egui::Label::new(text.as_str()).truncate())
                        .on_hover_text(text.as_str());
                });
            });
        });
}
