use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum TitroError {
    #[error("invalid input '{field}': {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("unknown product '{0}'. Run `titro products list` to see available keys.")]
    UnknownProduct(String),

    #[error("failed to load product table from {path}: {reason}")]
    ProductTableLoad { path: PathBuf, reason: String },

    #[error("invalid product table: {0}")]
    ProductTableInvalid(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TitroError {
    /// Shorthand for the precondition failures the formula layer raises.
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        TitroError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}
