// File: crates/chart-core/src/error.rs
// Summary: Error type shared by dataset validation, rendering and export.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid dataset: {0}")]
    InvalidDataset(String),

    #[error("failed to create {0} surface")]
    Surface(&'static str),

    #[error("{format} encoding failed: {reason}")]
    Encode { format: &'static str, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, ChartError>;
