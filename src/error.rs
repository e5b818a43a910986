use std::path::PathBuf;

use image::ImageError;
use thiserror::Error;

/// Display passes the codec or IO diagnostic through unchanged; the path is
/// kept as a field for logging.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{source}")]
    Decode { path: PathBuf, source: ImageError },

    #[error("{source}")]
    Write { path: PathBuf, source: ImageError },

    #[error(transparent)]
    Config(#[from] config::ConfigError),

    #[error("tolerance must be within 0..=255, got {0}")]
    InvalidTolerance(i64),
}

impl AppError {
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            AppError::Decode { path, .. } | AppError::Write { path, .. } => Some(path),
            AppError::Config(_) | AppError::InvalidTolerance(_) => None,
        }
    }
}
