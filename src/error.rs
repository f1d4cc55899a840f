use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while turning a file into a [`Dataset`].
///
/// [`Dataset`]: crate::data::model::Dataset
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Parquet error: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),

    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    #[error("missing column '{0}'")]
    MissingColumn(String),

    #[error("row {row}: cannot parse {column} value '{value}' as a date")]
    Date {
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("row {row}: invalid {column} value: {message}")]
    Value {
        row: usize,
        column: &'static str,
        message: String,
    },

    #[error("unsupported file extension: .{0}")]
    UnsupportedFormat(String),

    #[error("the file contains no sales records")]
    Empty,
}

pub type Result<T> = std::result::Result<T, LoadError>;
