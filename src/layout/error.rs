// Wed Feb 4 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Field not found: {structure}.{field}")]
    FieldNotFound { structure: String, field: String },
    #[error("Field offsets not strictly increasing: {structure}.{field}")]
    NonMonotonicOffset { structure: String, field: String },
    #[error("Field extends past end of structure: {structure}.{field}")]
    FieldOutOfBounds { structure: String, field: String },
    #[error("Duplicate field: {structure}.{field}")]
    DuplicateField { structure: String, field: String },
}
