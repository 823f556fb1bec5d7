/// Data layer: core types, loading, filtering and selection.
///
/// Architecture:
/// ```text
///   ProcessedTweets.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse CSV → Dataset (rows + summary)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  month + range predicates → filtered rows (plot order)
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ selection  │  plot point indices → raw text of selected rows
///   └───────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod selection;
