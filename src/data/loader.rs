use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use super::model::{Dataset, Row};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Anything that prevents a table from being loaded. Always fatal for the
/// load that raised it.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV missing '{0}' column")]
    MissingColumn(&'static str),

    #[error("line {line}, column '{column}': '{value}' is not a number")]
    InvalidValue {
        line: u64,
        column: &'static str,
        value: String,
    },

    #[error("line {line}, column '{column}': {value} is not a finite number")]
    NonFinite {
        line: u64,
        column: &'static str,
        value: f64,
    },

    #[error("file contains no data rows")]
    Empty,
}

// ---------------------------------------------------------------------------
// Column layout
// ---------------------------------------------------------------------------

pub const MONTH: &str = "Month";
pub const SENTIMENT: &str = "Sentiment";
pub const SUBJECTIVITY: &str = "Subjectivity";
pub const DIMENSION_1: &str = "Dimension 1";
pub const DIMENSION_2: &str = "Dimension 2";
pub const RAW_TWEET: &str = "RawTweet";

pub const REQUIRED_COLUMNS: [&str; 6] = [MONTH, SENTIMENT, SUBJECTIVITY, DIMENSION_1, DIMENSION_2, RAW_TWEET];

/// One CSV record with every cell still as text. Numeric cells are parsed
/// afterwards so errors can name the offending column.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Month")]
    month: String,
    #[serde(rename = "Sentiment")]
    sentiment: String,
    #[serde(rename = "Subjectivity")]
    subjectivity: String,
    #[serde(rename = "Dimension 1")]
    dim1: String,
    #[serde(rename = "Dimension 2")]
    dim2: String,
    #[serde(rename = "RawTweet")]
    raw_tweet: String,
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the tweet table from a CSV file on disk.
pub fn load_file(path: &Path) -> Result<Dataset, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_reader(file)
}

/// Load the tweet table from any CSV byte stream with a header row.
///
/// Extra columns are ignored. `Month` is kept as text; an integer month
/// is written in canonical form, so `3` and `03` both become `"3"`.
/// `RawTweet` is kept exactly as written.
pub fn load_reader<R: Read>(input: R) -> Result<Dataset, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(input);

    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(LoadError::MissingColumn(column));
        }
    }

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let raw: RawRecord = record.deserialize(Some(&headers))?;

        rows.push(Row {
            month: canonical_month(&raw.month),
            sentiment: parse_number(&raw.sentiment, line, SENTIMENT)?,
            subjectivity: parse_number(&raw.subjectivity, line, SUBJECTIVITY)?,
            dim1: parse_number(&raw.dim1, line, DIMENSION_1)?,
            dim2: parse_number(&raw.dim2, line, DIMENSION_2)?,
            raw_text: raw.raw_tweet,
        });
    }

    log::debug!("parsed {} CSV rows", rows.len());
    Dataset::from_rows(rows).ok_or(LoadError::Empty)
}

/// Integer months are rendered the way an integer column prints; any other
/// label is only trimmed.
fn canonical_month(text: &str) -> String {
    let text = text.trim();
    match text.parse::<i64>() {
        Ok(n) => n.to_string(),
        Err(_) => text.to_string(),
    }
}

fn parse_number(text: &str, line: u64, column: &'static str) -> Result<f64, LoadError> {
    let text = text.trim();
    let value = text.parse::<f64>().map_err(|_| LoadError::InvalidValue {
        line,
        column,
        value: text.to_string(),
    })?;
    if !value.is_finite() {
        return Err(LoadError::NonFinite { line, column, value });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;
    use crate::data::model::ValueRange;

    const HEADER: &str = "Month,Sentiment,Subjectivity,Dimension 1,Dimension 2,RawTweet\n";

    fn load_str(content: &str) -> Result<Dataset, LoadError> {
        load_reader(content.as_bytes())
    }

    #[test]
    fn loads_rows_in_source_order() {
        let csv = format!(
            "{HEADER}Jan,0.5,0.2,1.0,2.0,a\nJan,-0.1,0.9,3.0,4.0,b\nFeb,0.5,0.2,5.0,6.0,c\n"
        );
        let ds = load_str(&csv).unwrap();
        let texts: Vec<&str> = ds.rows().iter().map(|r| r.raw_text.as_str()).collect();
        assert_eq!(texts, ["a", "b", "c"]);
        assert_eq!(ds.rows()[1].dim1, 3.0);
        assert_eq!(ds.rows()[1].dim2, 4.0);
        assert_eq!(ds.summary().sentiment_range, ValueRange::new(-0.1, 0.5));
    }

    #[test]
    fn numeric_month_becomes_text() {
        let csv = format!("{HEADER}4,0.0,0.0,0,0,x\n5,0.1,0.1,0,0,y\n");
        let ds = load_str(&csv).unwrap();
        assert_eq!(ds.months(), ["4".to_string(), "5".to_string()]);
    }

    #[test]
    fn quoted_text_and_extra_columns() {
        let csv = "Id,Month,Sentiment,Subjectivity,Dimension 1,Dimension 2,RawTweet\n\
                   7,Mar,0.3,0.4,1,1,\"hello, world\"\n";
        let ds = load_str(csv).unwrap();
        assert_eq!(ds.rows()[0].raw_text, "hello, world");
        assert_eq!(ds.rows()[0].month, "Mar");
    }

    #[test]
    fn integer_months_are_canonical() {
        let csv = format!("{HEADER} 03 ,0.0,0.0,0,0,x\n3,0.1,0.1,0,0,y\n3.0,0,0,0,0,z\nMar ,0,0,0,0,w\n");
        let ds = load_str(&csv).unwrap();
        assert_eq!(ds.months(), ["3".to_string(), "3.0".to_string(), "Mar".to_string()]);
    }

    #[test]
    fn tweet_text_is_not_trimmed() {
        let csv = format!("{HEADER}Jan, 0.1 ,0.1, 0,0 ,\"  indented tweet  \"\n");
        let ds = load_str(&csv).unwrap();
        assert_eq!(ds.rows()[0].raw_text, "  indented tweet  ");
        assert_eq!(ds.rows()[0].sentiment, 0.1);
    }

    #[test]
    fn header_names_are_trimmed() {
        let csv = " Month , Sentiment,Subjectivity,Dimension 1 ,Dimension 2,RawTweet \nJan,0,0,0,0,x\n";
        assert_eq!(load_str(csv).unwrap().len(), 1);
    }

    #[test]
    fn missing_column_is_reported() {
        let csv = "Month,Sentiment,Subjectivity,Dimension 1,RawTweet\nJan,0,0,0,x\n";
        assert!(matches!(load_str(csv), Err(LoadError::MissingColumn("Dimension 2"))));
    }

    #[test]
    fn unparsable_number_names_column() {
        let csv = format!("{HEADER}Jan,0.5,high,0,0,x\n");
        match load_str(&csv) {
            Err(LoadError::InvalidValue { column, value, line }) => {
                assert_eq!(column, SUBJECTIVITY);
                assert_eq!(value, "high");
                assert_eq!(line, 2);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn non_finite_number_is_rejected() {
        let csv = format!("{HEADER}Jan,NaN,0.1,0,0,x\n");
        assert!(matches!(load_str(&csv), Err(LoadError::NonFinite { column: SENTIMENT, .. })));
    }

    #[test]
    fn ragged_row_is_malformed() {
        let csv = format!("{HEADER}Jan,0.5,0.1,0\n");
        assert!(matches!(load_str(&csv), Err(LoadError::Csv(_))));
    }

    #[test]
    fn header_only_is_empty() {
        assert!(matches!(load_str(HEADER), Err(LoadError::Empty)));
    }

    #[test]
    fn loads_from_disk() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{HEADER}Jan,0.5,0.2,1,2,a\n").unwrap();
        file.flush().unwrap();

        let ds = load_file(file.path()).unwrap();
        assert_eq!(ds.len(), 1);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.csv");
        assert!(matches!(load_file(&path), Err(LoadError::Io { .. })));
    }
}
