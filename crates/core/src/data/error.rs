use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TableError {
    #[error("failed to open table {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed table: {0}")]
    Csv(#[from] csv::Error),

    #[error("table has no index column (expected an empty or 'Unnamed: 0' header)")]
    MissingIndexColumn,

    #[error("unknown column '{0}'")]
    UnknownColumn(String),

    #[error("column '{column}' row {row}: '{value}' is not a number")]
    NonNumeric {
        column: String,
        row: usize,
        value: String,
    },
}

pub type TableResult<T> = Result<T, TableError>;
