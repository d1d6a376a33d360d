use crate::point::PointError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse dataset JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse dataset CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid record at index {index}: {source}")]
    InvalidRecord {
        index: usize,
        #[source]
        source: PointError,
    },
}
