pub mod aggregator;
pub mod format;
pub mod plot;

use thiserror::Error;

pub use aggregator::summarize;
pub use plot::build_plot;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    /// The document holds no comparable tagged as a completed sale, so
    /// max/min/range are undefined. Callers render this as a neutral
    /// empty state rather than an error banner.
    #[error("no comparable sale records to analyze")]
    NoSaleRecords,
}
