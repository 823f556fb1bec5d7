use eframe::egui::{Color32, Key, PointerButton, Ui};
use egui_plot::{Line, MarkerShape, Plot, PlotPoint, PlotPoints, Points};

use crate::color::{BUCKETS, ColorScale};
use crate::data::filter::filter_rows;
use crate::data::model::Row;
use crate::lasso::Lasso;
use crate::state::AppState;

const LASSO_COLOR: Color32 = Color32::from_rgb(255, 140, 0);
const SELECTED_COLOR: Color32 = Color32::WHITE;
/// Hover text is cut to this many characters.
const HOVER_CHARS: usize = 140;

// ---------------------------------------------------------------------------
// Tweet scatter plot (central panel)
// ---------------------------------------------------------------------------

/// Render the projection scatter and handle lasso drawing.
///
/// Primary drag draws a lasso; releasing it selects the points inside.
/// Escape clears the selection.
pub fn scatter_plot(ui: &mut Ui, state: &mut AppState) {
    let filtered = filter_rows(&state.dataset, &state.filter);
    if filtered.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No tweets match the current filters");
        });
        return;
    }

    // Batch points by colour so each bucket is a single plot item.
    let mut buckets: Vec<Vec<[f64; 2]>> = vec![Vec::new(); BUCKETS];
    for row in &filtered {
        buckets[state.color_scale.bucket(row.sentiment)].push([row.dim1, row.dim2]);
    }

    let highlighted: Vec<[f64; 2]> = state
        .selection
        .iter()
        .flatten()
        .filter_map(|&i| filtered.get(i))
        .map(|row| [row.dim1, row.dim2])
        .collect();

    let lasso_outline: Option<Vec<[f64; 2]>> = state.lasso.as_ref().map(|lasso| {
        let mut outline = lasso.vertices().to_vec();
        if let Some(&first) = outline.first() {
            outline.push(first);
        }
        outline
    });

    let radius = state.point_radius;
    let hover_rows = &filtered;

    let response = Plot::new("tweet_scatter")
        .show_axes(false)
        .show_grid(false)
        .allow_drag(false)
        .allow_boxed_zoom(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .label_formatter(move |name, value| hover_text(hover_rows, name, value))
        .show(ui, |plot_ui| {
            for (bucket, points) in buckets.into_iter().enumerate() {
                if points.is_empty() {
                    continue;
                }
                plot_ui.points(
                    Points::new(points)
                        .name("tweet")
                        .shape(MarkerShape::Circle)
                        .filled(true)
                        .radius(radius)
                        .color(ColorScale::bucket_color(bucket)),
                );
            }

            if !highlighted.is_empty() {
                plot_ui.points(
                    Points::new(highlighted)
                        .name("tweet")
                        .shape(MarkerShape::Circle)
                        .filled(false)
                        .radius(radius + 2.0)
                        .color(SELECTED_COLOR),
                );
            }

            if let Some(outline) = lasso_outline {
                plot_ui.line(
                    Line::new(PlotPoints::from(outline))
                        .color(LASSO_COLOR)
                        .width(1.5),
                );
            }
        });

    let plot = &response.response;
    let pointer = plot
        .interact_pointer_pos()
        .map(|pos| response.transform.value_from_position(pos));

    if plot.drag_started_by(PointerButton::Primary) {
        state.lasso = Some(Lasso::new());
    }
    if plot.dragged_by(PointerButton::Primary) {
        if let (Some(lasso), Some(p)) = (state.lasso.as_mut(), pointer) {
            lasso.push([p.x, p.y]);
        }
    }
    if plot.drag_stopped_by(PointerButton::Primary) {
        state.finish_lasso();
    }

    if ui.input(|i| i.key_pressed(Key::Escape)) {
        state.clear_selection();
    }
}

/// Tooltip for a hovered point: its tweet text and sentiment. Empty when
/// the pointer is not over a tweet marker.
fn hover_text(rows: &[&Row], name: &str, value: &PlotPoint) -> String {
    if name.is_empty() {
        return String::new();
    }
    rows.iter()
        .find(|row| row.dim1 == value.x && row.dim2 == value.y)
        .map(|row| {
            let mut text: String = row.raw_text.chars().take(HOVER_CHARS).collect();
            if row.raw_text.chars().count() > HOVER_CHARS {
                text.push('…');
            }
            format!("{text}\nSentiment: {:.2}", row.sentiment)
        })
        .unwrap_or_default()
}
