use std::path::Path;

use crate::color::ColorScale;
use crate::config::Config;
use crate::data::filter::{FilterSelection, filter_rows};
use crate::data::loader;
use crate::data::model::{Dataset, Row};
use crate::data::selection::{SelectionIndices, select_rows};
use crate::lasso::Lasso;

// ---------------------------------------------------------------------------
// Table page
// ---------------------------------------------------------------------------

/// One page of the selected-tweets table, detached from the state so the
/// UI can keep mutating pagination while drawing it.
#[derive(Debug, Clone, PartialEq)]
pub struct TablePage {
    pub texts: Vec<String>,
    /// Zero-based page index.
    pub page: usize,
    /// Always at least 1.
    pub page_count: usize,
    /// Total number of selected rows across all pages.
    pub total: usize,
}

/// Number of pages needed for `total` rows, never less than one.
pub fn page_count(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1)).max(1)
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// Per interaction the state moves through
/// `Filtered -> Selected -> Filtered ...`: any filter change throws the
/// current selection away, since its indices only make sense against the
/// filtered rows that produced them.
pub struct AppState {
    /// Loaded table, read-only between reloads.
    pub dataset: Dataset,

    /// Current month / range filter.
    pub filter: FilterSelection,

    /// Lassoed positions into the current filtered rows, `None` when
    /// nothing has been selected.
    pub selection: Option<SelectionIndices>,

    /// Lasso being drawn right now.
    pub lasso: Option<Lasso>,

    /// Colour ramp over the dataset's sentiment range.
    pub color_scale: ColorScale,

    /// Current table page (zero-based).
    pub page: usize,
    pub page_size: usize,

    pub point_radius: f32,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(dataset: Dataset, config: &Config) -> Self {
        Self {
            filter: FilterSelection::default_for(&dataset),
            color_scale: ColorScale::new(dataset.summary().sentiment_range),
            dataset,
            selection: None,
            lasso: None,
            page: 0,
            page_size: usize::from(config.page_size),
            point_radius: config.point_radius,
            status_message: None,
        }
    }

    /// Swap in a newly loaded dataset and reset everything derived from it.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.filter = FilterSelection::default_for(&dataset);
        self.color_scale = ColorScale::new(dataset.summary().sentiment_range);
        self.dataset = dataset;
        self.selection = None;
        self.lasso = None;
        self.page = 0;
        self.status_message = None;
    }

    /// Load a CSV file and make it the active dataset. On failure the
    /// previous dataset stays active and the error is shown.
    pub fn load_path(&mut self, path: &Path) {
        match loader::load_file(path) {
            Ok(dataset) => {
                log::info!("Loaded {} from {}", describe(&dataset), path.display());
                self.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load {}: {e}", path.display());
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    // -- filter ------------------------------------------------------------

    /// Replace the filter wholesale. Ranges are clamped into the dataset
    /// bounds; an unknown month is ignored. Any actual change discards the
    /// current selection.
    pub fn set_filter(&mut self, filter: FilterSelection) {
        if !self.dataset.months().contains(&filter.month) {
            log::warn!("Ignoring filter for unknown month '{}'", filter.month);
            return;
        }
        let summary = self.dataset.summary();
        let filter = FilterSelection {
            sentiment: summary.sentiment_range.clamp(filter.sentiment),
            subjectivity: summary.subjectivity_range.clamp(filter.subjectivity),
            month: filter.month,
        };
        if filter == self.filter {
            return;
        }

        log::debug!(
            "Filter: month={} sentiment={} subjectivity={}",
            filter.month,
            filter.sentiment,
            filter.subjectivity
        );
        self.filter = filter;
        self.invalidate_selection();
    }

    /// Back to first month and full ranges.
    pub fn reset_filter(&mut self) {
        self.set_filter(FilterSelection::default_for(&self.dataset));
    }

    /// Rows passing the current filter, in plot-point order.
    pub fn filtered_rows(&self) -> Vec<&Row> {
        filter_rows(&self.dataset, &self.filter)
    }

    // -- selection ---------------------------------------------------------

    pub fn set_selection(&mut self, indices: SelectionIndices) {
        log::debug!("Selected {} points", indices.len());
        self.selection = Some(indices);
        self.page = 0;
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
        self.lasso = None;
        self.page = 0;
    }

    fn invalidate_selection(&mut self) {
        if self.selection.is_some() || self.lasso.is_some() {
            log::debug!("Filter changed, discarding selection");
        }
        self.clear_selection();
    }

    /// Close the lasso being drawn and select the filtered points inside it.
    /// A lasso too small to enclose anything leaves the selection alone.
    pub fn finish_lasso(&mut self) {
        let Some(lasso) = self.lasso.take() else {
            return;
        };
        if !lasso.is_closed_shape() {
            return;
        }
        let indices = lasso.select(&self.filtered_rows());
        self.set_selection(indices);
    }

    /// Number of selected rows; zero when nothing is selected.
    pub fn selected_count(&self) -> usize {
        self.selection.as_ref().map_or(0, |s| s.len())
    }

    // -- table -------------------------------------------------------------

    /// Current page of the table. A selection that no longer fits the
    /// filtered rows is dropped here rather than shown truncated.
    pub fn table_page(&mut self) -> TablePage {
        let filtered = filter_rows(&self.dataset, &self.filter);
        let texts = match select_rows(&filtered, self.selection.as_ref()) {
            Ok(texts) => texts,
            Err(e) => {
                log::warn!("Discarding stale selection: {e}");
                self.selection = None;
                Vec::new()
            }
        };

        let total = texts.len();
        let page_count = page_count(total, self.page_size);
        self.page = self.page.min(page_count - 1);

        let start = self.page * self.page_size;
        TablePage {
            texts: texts
                .into_iter()
                .skip(start)
                .take(self.page_size)
                .map(str::to_owned)
                .collect(),
            page: self.page,
            page_count,
            total,
        }
    }

    pub fn next_page(&mut self) {
        self.page = self.page.saturating_add(1);
    }

    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1);
    }
}

/// One-line description of a dataset for logs.
pub fn describe(dataset: &Dataset) -> String {
    let s = dataset.summary();
    format!(
        "{} tweets, {} months, sentiment {}, subjectivity {}",
        dataset.len(),
        s.months.len(),
        s.sentiment_range,
        s.subjectivity_range
    )
}
