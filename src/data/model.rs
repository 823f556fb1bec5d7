use std::collections::HashSet;
use std::fmt;

// ---------------------------------------------------------------------------
// Row – one post of the source table
// ---------------------------------------------------------------------------

/// A single social-media post with its scores and projection coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// Month label, always text even when the source stores it as a number.
    pub month: String,
    pub sentiment: f64,
    pub subjectivity: f64,
    /// Projection coordinates, only used for plot placement.
    pub dim1: f64,
    pub dim2: f64,
    pub raw_text: String,
}

// ---------------------------------------------------------------------------
// ValueRange – inclusive [min, max] bounds
// ---------------------------------------------------------------------------

/// Inclusive numeric bounds with `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Both ends inclusive.
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Clamp `other` into this range and restore ordering of its ends.
    pub fn clamp(&self, other: ValueRange) -> ValueRange {
        let lo = other.min.clamp(self.min, self.max);
        let hi = other.max.clamp(self.min, self.max);
        ValueRange::new(lo.min(hi), lo.max(hi))
    }

    fn widen(&mut self, value: f64) {
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }
}

impl fmt::Display for ValueRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.2}, {:.2}]", self.min, self.max)
    }
}

// ---------------------------------------------------------------------------
// Summary – statistics computed once at load time
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Distinct months in first-occurrence order.
    pub months: Vec<String>,
    pub sentiment_range: ValueRange,
    pub subjectivity_range: ValueRange,
}

impl Summary {
    /// Single pass over `rows`. Returns `None` for an empty table since
    /// there are no bounds to report.
    pub fn summarize(rows: &[Row]) -> Option<Self> {
        let first = rows.first()?;
        let mut seen: HashSet<&str> = HashSet::new();
        let mut months = Vec::new();
        let mut sentiment_range = ValueRange::new(first.sentiment, first.sentiment);
        let mut subjectivity_range = ValueRange::new(first.subjectivity, first.subjectivity);

        for row in rows {
            if seen.insert(row.month.as_str()) {
                months.push(row.month.clone());
            }
            sentiment_range.widen(row.sentiment);
            subjectivity_range.widen(row.subjectivity);
        }

        Some(Summary {
            months,
            sentiment_range,
            subjectivity_range,
        })
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The immutable table plus its cached summary. Row order is the source
/// order and is never changed after construction.
#[derive(Debug, Clone)]
pub struct Dataset {
    rows: Vec<Row>,
    summary: Summary,
}

impl Dataset {
    /// Build the dataset and its summary. `None` when `rows` is empty.
    pub fn from_rows(rows: Vec<Row>) -> Option<Self> {
        let summary = Summary::summarize(&rows)?;
        Some(Dataset { rows, summary })
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    pub fn months(&self) -> &[String] {
        &self.summary.months
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

#[cfg(test)]
pub(crate) fn row(month: &str, sentiment: f64, subjectivity: f64, raw_text: &str) -> Row {
    Row {
        month: month.to_string(),
        sentiment,
        subjectivity,
        dim1: 0.0,
        dim2: 0.0,
        raw_text: raw_text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Row> {
        vec![
            row("Jan", 0.5, 0.2, "a"),
            row("Jan", -0.1, 0.9, "b"),
            row("Feb", 0.5, 0.2, "c"),
        ]
    }

    #[test]
    fn summary_keeps_first_occurrence_order() {
        let summary = Summary::summarize(&sample()).unwrap();
        assert_eq!(summary.months, vec!["Jan".to_string(), "Feb".to_string()]);
        assert_eq!(summary.sentiment_range, ValueRange::new(-0.1, 0.5));
        assert_eq!(summary.subjectivity_range, ValueRange::new(0.2, 0.9));
    }

    #[test]
    fn months_are_not_sorted() {
        let rows = vec![row("May", 0.0, 0.0, "x"), row("Apr", 0.0, 0.0, "y"), row("May", 0.0, 0.0, "z")];
        let summary = Summary::summarize(&rows).unwrap();
        assert_eq!(summary.months, vec!["May".to_string(), "Apr".to_string()]);
    }

    #[test]
    fn ranges_cover_every_row() {
        let ds = Dataset::from_rows(sample()).unwrap();
        let s = ds.summary();
        assert!(ds
            .rows()
            .iter()
            .all(|r| s.sentiment_range.contains(r.sentiment) && s.subjectivity_range.contains(r.subjectivity)));
    }

    #[test]
    fn empty_rows_have_no_summary() {
        assert!(Summary::summarize(&[]).is_none());
        assert!(Dataset::from_rows(Vec::new()).is_none());
    }

    #[test]
    fn clamp_orders_and_bounds() {
        let full = ValueRange::new(-1.0, 1.0);
        assert_eq!(full.clamp(ValueRange::new(0.8, -3.0)), ValueRange::new(-1.0, 0.8));
        assert_eq!(full.clamp(ValueRange::new(-0.5, 0.5)), ValueRange::new(-0.5, 0.5));
    }
}
