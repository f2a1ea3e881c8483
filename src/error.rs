use std::io;
use thiserror::Error;

use crate::catalog::CatalogError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Catalog(#[from] CatalogError),
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),
    #[error("could not encode output: {0}")]
    Json(#[from] serde_json::Error),
}
