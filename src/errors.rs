//! Generator error types.
//!
//! Every failure is fatal for the run: catalog defects abort before any artifact is rendered, and sink failures abort
//! before a partial pair becomes visible. Nothing here is retried; fix the cause and run again.

use std::io;
use std::path::PathBuf;

use firgen_core::CatalogError;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum GenError {
    #[error(transparent)]
    #[diagnostic(
        code(firgen::catalog),
        help("every signature needs a unique code and a tap type; IOT codes use the letters s, i, f and c")
    )]
    Catalog(#[from] CatalogError),

    #[error("cannot write `{}`", path.display())]
    #[diagnostic(
        code(firgen::sink_unavailable),
        help("check that the output directory exists and is writable; no artifact was published")
    )]
    SinkUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid configuration: {0}")]
    #[diagnostic(code(firgen::config))]
    InvalidConfig(String),

    #[error("cannot load catalog file `{}`: {message}", path.display())]
    #[diagnostic(code(firgen::catalog_file))]
    CatalogFile { path: PathBuf, message: String },
}

impl GenError {
    /// Whether this error comes from the catalog rather than from IO or configuration.
    pub fn is_catalog_defect(&self) -> bool {
        matches!(self, GenError::Catalog(_))
    }
}

pub type GenResult<T> = Result<T, GenError>;
