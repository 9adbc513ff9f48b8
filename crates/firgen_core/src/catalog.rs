//! The ordered signature catalog.
//!
//! A [`SignatureCatalog`] is the single source of truth both emitters traverse. It is built once, validated once,
//! and never mutated afterwards, so the header and the implementation always see the same signatures in the same
//! order.
//!
//! ## Notes
//! - Order is declaration order. Nothing sorts or deduplicates silently; a duplicate code is an error.
//! - Descriptors carry their tap type so emitters never consult the lookup table again.

use std::collections::HashSet;

use crate::errors::CatalogError;
use crate::signatures;

/// One filter signature: a code token plus the element type of its taps.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SignatureDescriptor {
    code: String,
    tap_type: String,
}

impl SignatureDescriptor {
    /// Descriptor for an `IOT` code, with the tap type looked up from the code.
    ///
    /// ## Errors
    /// - [`CatalogError::UnknownSignature`] if the code has no tap-type mapping.
    pub fn from_code(code: &str) -> Result<Self, CatalogError> {
        let tap_type = signatures::tap_type(code)?;
        Self::explicit(code, tap_type)
    }

    /// Descriptor with an explicit tap type (the code does not need to follow `IOT`).
    pub fn explicit(code: &str, tap_type: &str) -> Result<Self, CatalogError> {
        if !is_identifier_fragment(code) {
            return Err(CatalogError::InvalidCode(code.to_string()));
        }
        if tap_type.trim().is_empty() {
            return Err(CatalogError::UnknownSignature(code.to_string()));
        }
        Ok(Self {
            code: code.to_string(),
            tap_type: tap_type.trim().to_string(),
        })
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn tap_type(&self) -> &str {
        &self.tap_type
    }
}

/// Ordered, validated set of signatures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureCatalog {
    entries: Vec<SignatureDescriptor>,
}

impl SignatureCatalog {
    /// The signatures shipped by default ([`signatures::BUILTIN_SIGNATURES`]).
    ///
    /// Validated like any other catalog, so a bad table entry fails here instead of being skipped.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_codes(signatures::BUILTIN_SIGNATURES)
    }

    /// Build a catalog from `IOT` codes, in the given order.
    ///
    /// ## Errors
    /// - [`CatalogError::UnknownSignature`] for the first code with no tap-type mapping.
    /// - [`CatalogError::DuplicateSignature`] for the first repeated code.
    #[tracing::instrument(skip_all, fields(count = codes.len()))]
    pub fn from_codes<S: AsRef<str>>(codes: &[S]) -> Result<Self, CatalogError> {
        let entries = codes
            .iter()
            .map(|code| SignatureDescriptor::from_code(code.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_descriptors(entries)
    }

    /// Build a catalog from already-resolved descriptors, in the given order.
    pub fn from_descriptors(entries: Vec<SignatureDescriptor>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for d in &entries {
            if !seen.insert(d.code.as_str()) {
                return Err(CatalogError::DuplicateSignature(d.code.clone()));
            }
        }
        tracing::debug!(count = entries.len(), "signature catalog built");
        Ok(Self { entries })
    }

    /// Iterate descriptors in declaration order. Every call starts from the first signature.
    pub fn iter(&self) -> std::slice::Iter<'_, SignatureDescriptor> {
        self.entries.iter()
    }

    /// Look up a descriptor by code.
    pub fn get(&self, code: &str) -> Option<&SignatureDescriptor> {
        self.entries.iter().find(|d| d.code == code)
    }

    /// Tap type for a code in this catalog.
    ///
    /// ## Errors
    /// - [`CatalogError::UnknownSignature`] if the code is not in the catalog.
    pub fn tap_type(&self, code: &str) -> Result<&str, CatalogError> {
        self.get(code)
            .map(SignatureDescriptor::tap_type)
            .ok_or_else(|| CatalogError::UnknownSignature(code.to_string()))
    }

    /// Copy of this catalog with one signature removed. Unknown codes leave it unchanged.
    pub fn without(&self, code: &str) -> Self {
        Self {
            entries: self.entries.iter().filter(|d| d.code != code).cloned().collect(),
        }
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|d| d.code.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a SignatureCatalog {
    type Item = &'a SignatureDescriptor;
    type IntoIter = std::slice::Iter<'a, SignatureDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn is_identifier_fragment(code: &str) -> bool {
    !code.is_empty() && code.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}
