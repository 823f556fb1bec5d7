use super::model::{Dataset, Row, ValueRange};

// ---------------------------------------------------------------------------
// Filter predicate: month + two inclusive numeric ranges
// ---------------------------------------------------------------------------

/// The user's current filter choice. Always replaced as a whole, never
/// patched field by field.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSelection {
    pub month: String,
    pub sentiment: ValueRange,
    pub subjectivity: ValueRange,
}

impl FilterSelection {
    /// First month, full sentiment range, full subjectivity range.
    pub fn default_for(dataset: &Dataset) -> Self {
        let summary = dataset.summary();
        FilterSelection {
            month: summary.months.first().cloned().unwrap_or_default(),
            sentiment: summary.sentiment_range,
            subjectivity: summary.subjectivity_range,
        }
    }

    /// Whether `row` passes all three predicates.
    pub fn matches(&self, row: &Row) -> bool {
        row.month == self.month
            && self.sentiment.contains(row.sentiment)
            && self.subjectivity.contains(row.subjectivity)
    }
}

/// Return the rows passing `selection`, in dataset order.
///
/// Position `i` of the returned vector is plot point `i`. Selection indices
/// coming back from the plot refer to these positions, so the result must
/// never be re-sorted. An empty result is valid.
pub fn filter_rows<'a>(dataset: &'a Dataset, selection: &FilterSelection) -> Vec<&'a Row> {
    dataset
        .rows()
        .iter()
        .filter(|row| selection.matches(row))
        .collect()
}
