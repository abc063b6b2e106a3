// Wed Feb 4 2026 - Alex

use crate::layout::LayoutError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Linkage validation failed: probe returned {got}, expected {expected}")]
    LinkageValidation { got: i32, expected: i32 },
    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
