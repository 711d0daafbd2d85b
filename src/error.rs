use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),

    #[error("failed to open file {}: {source}", path.display())]
    OpenInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse GPX: {0}")]
    Gpx(#[from] gpx::errors::GpxError),

    #[error("no points found in GPX file")]
    NoPoints,

    #[error("invalid distance value: {0} (segment distance must be a positive number of km)")]
    InvalidSegmentDistance(f64),

    #[error("unsupported output format: {0}")]
    UnsupportedFormat(String),

    #[error("failed to write JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, ProfileError>;
