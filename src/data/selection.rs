use std::collections::BTreeSet;

use thiserror::Error;

use super::model::Row;

/// Positions into the *filtered* row sequence picked on the plot. A
/// `BTreeSet` keeps them unique and ascending.
pub type SelectionIndices = BTreeSet<usize>;

/// A selection index that does not exist in the filtered rows it was
/// applied to. This means the selection outlived the filter that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("selection index {index} out of bounds for {len} filtered rows")]
pub struct IndexError {
    pub index: usize,
    pub len: usize,
}

/// Project the selected filtered rows onto their raw text, in ascending
/// index order.
///
/// `None` or an empty set means nothing is selected and yields an empty
/// vector. Any out-of-range index fails the whole call; the result is
/// never truncated.
pub fn select_rows<'a>(
    filtered: &[&'a Row],
    indices: Option<&SelectionIndices>,
) -> Result<Vec<&'a str>, IndexError> {
    let Some(indices) = indices else {
        return Ok(Vec::new());
    };

    if let Some(&index) = indices.iter().find(|&&i| i >= filtered.len()) {
        return Err(IndexError {
            index,
            len: filtered.len(),
        });
    }

    Ok(indices
        .iter()
        .map(|&i| filtered[i].raw_text.as_str())
        .collect())
}
