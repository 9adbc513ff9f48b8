//! JSON catalog files.
//!
//! ```json
//! {
//!   "family": "gr_fir",
//!   "signatures": [
//!     { "code": "sf", "tap_type": "float" },
//!     { "code": "ccf" }
//!   ]
//! }
//! ```
//!
//! An entry without `tap_type` must be an `IOT` code; its tap type comes from the element-type registry.

use std::fs;
use std::path::{Path, PathBuf};

use firgen_core::{SignatureCatalog, SignatureDescriptor};
use serde::Deserialize;

use crate::errors::{GenError, GenResult};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogFile {
    /// Overrides the configured family stem
    #[serde(default)]
    pub family: Option<String>,
    pub signatures: Vec<SignatureEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SignatureEntry {
    pub code: String,
    #[serde(default)]
    pub tap_type: Option<String>,
}

impl CatalogFile {
    /// Read and parse a catalog file.
    pub fn load(path: impl AsRef<Path>) -> GenResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| catalog_file_error(path, e.to_string()))?;
        Self::parse(&text, path)
    }

    /// Parse catalog JSON; `origin` is only used in error messages.
    pub fn parse(text: &str, origin: &Path) -> GenResult<Self> {
        serde_json::from_str(text).map_err(|e| catalog_file_error(origin, e.to_string()))
    }

    /// Resolve the entries into a validated catalog, keeping file order.
    #[tracing::instrument(skip_all, fields(entries = self.signatures.len()))]
    pub fn catalog(&self) -> GenResult<SignatureCatalog> {
        let descriptors = self
            .signatures
            .iter()
            .map(|entry| match &entry.tap_type {
                Some(tap) => SignatureDescriptor::explicit(&entry.code, tap),
                None => SignatureDescriptor::from_code(&entry.code),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(SignatureCatalog::from_descriptors(descriptors)?)
    }
}

fn catalog_file_error(path: &Path, message: String) -> GenError {
    GenError::CatalogFile {
        path: PathBuf::from(path),
        message,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use firgen_core::CatalogError;

    fn parse(text: &str) -> GenResult<CatalogFile> {
        CatalogFile::parse(text, Path::new("catalog.json"))
    }

    #[test]
    fn test_explicit_and_iot_entries() {
        let file = parse(
            r#"{ "signatures": [ { "code": "sf", "tap_type": "float" }, { "code": "ccf" } ] }"#,
        )
        .unwrap();
        assert_eq!(file.family, None);
        let catalog = file.catalog().unwrap();
        let codes: Vec<_> = catalog.codes().collect();
        assert_eq!(codes, vec!["sf", "ccf"]);
        assert_eq!(catalog.tap_type("ccf"), Ok("float"));
    }

    #[test]
    fn test_family_override() {
        let file = parse(r#"{ "family": "dsp_fir", "signatures": [] }"#).unwrap();
        assert_eq!(file.family.as_deref(), Some("dsp_fir"));
        assert!(file.catalog().unwrap().is_empty());
    }

    #[test]
    fn test_missing_tap_type_for_non_iot_code() {
        let file = parse(r#"{ "signatures": [ { "code": "sf" } ] }"#).unwrap();
        match file.catalog().unwrap_err() {
            GenError::Catalog(CatalogError::UnknownSignature(code)) => assert_eq!(code, "sf"),
            other => panic!("expected UnknownSignature, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_entries() {
        let file = parse(r#"{ "signatures": [ { "code": "fff" }, { "code": "fff", "tap_type": "float" } ] }"#).unwrap();
        assert!(matches!(
            file.catalog(),
            Err(GenError::Catalog(CatalogError::DuplicateSignature(_)))
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(parse("{ nope"), Err(GenError::CatalogFile { .. })));
        assert!(matches!(
            parse(r#"{ "signatures": [], "extra": 1 }"#),
            Err(GenError::CatalogFile { .. })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = CatalogFile::load("/nonexistent/firgen/catalog.json").unwrap_err();
        assert!(matches!(err, GenError::CatalogFile { .. }));
    }
}
