//! Catalog construction errors.
//!
//! Every variant is a configuration defect: the catalog is wrong and generation must stop before any artifact is
//! written. None of these are transient, so callers should not retry.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The code has no tap-type mapping (not an `IOT` code and no explicit tap type given).
    #[error("unknown signature `{0}`: no tap type is registered for this code")]
    UnknownSignature(String),

    /// The same code was declared twice.
    #[error("duplicate signature `{0}`: signature codes must be unique within a catalog")]
    DuplicateSignature(String),

    /// The code cannot be spliced into a C identifier.
    #[error("invalid signature code `{0}`: codes must be non-empty and use only [A-Za-z0-9_]")]
    InvalidCode(String),
}

impl CatalogError {
    /// The offending signature code.
    pub fn code(&self) -> &str {
        match self {
            CatalogError::UnknownSignature(code)
            | CatalogError::DuplicateSignature(code)
            | CatalogError::InvalidCode(code) => code,
        }
    }
}
