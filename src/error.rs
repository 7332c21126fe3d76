use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("could not read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("dataset has no rows")]
    EmptyDataset,

    #[error("dataset has no header line")]
    MissingHeader,

    /// The header needs at least one feature column and the label column.
    #[error("header has {0} column(s), need at least 2")]
    NarrowHeader(usize),

    #[error("line {line}: expected {expected} fields, found {found}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("tree has not been fitted")]
    NotFitted,

    #[error("feature `{0}` is missing from the dataset header")]
    UnknownFeature(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
