//! Built-in FIR signatures and the `IOT` code convention.
//!
//! A signature code has the form `IOT`: `I` codes the input element type, `O` the output element type and `T` the
//! tap (coefficient) type, each drawn from [`crate::elements`]. `ccf` is complex in, complex out, float taps.
//!
//! ## Examples
//! ```rust
//! use firgen_core::signatures;
//!
//! assert_eq!(signatures::tap_type("fcc"), Ok("gr_complex"));
//! assert_eq!(signatures::input_type("scc"), Ok("short"));
//! assert!(signatures::tap_type("sf").is_err());
//! ```

use crate::elements::{self, ElementTypeId};
use crate::errors::CatalogError;

/// Signatures shipped by default, in declaration order.
pub const BUILTIN_SIGNATURES: &[&str] = &["ccc", "ccf", "fcc", "fff", "scc", "fsf"];

/// Split an `IOT` code into its three element types.
///
/// ## Errors
/// - [`CatalogError::UnknownSignature`] if the code is not exactly three known element letters.
pub fn split(code: &str) -> Result<[ElementTypeId; 3], CatalogError> {
    let unknown = || CatalogError::UnknownSignature(code.to_string());
    let mut letters = code.chars();
    let (Some(i), Some(o), Some(t), None) = (letters.next(), letters.next(), letters.next(), letters.next()) else {
        return Err(unknown());
    };
    let resolve = |c: char| elements::from_code(c).ok_or_else(unknown);
    Ok([resolve(i)?, resolve(o)?, resolve(t)?])
}

/// Input element type of an `IOT` code.
pub fn input_type(code: &str) -> Result<&'static str, CatalogError> {
    split(code).map(|[i, _, _]| elements::as_str(i))
}

/// Output element type of an `IOT` code.
pub fn output_type(code: &str) -> Result<&'static str, CatalogError> {
    split(code).map(|[_, o, _]| elements::as_str(o))
}

/// Tap element type of an `IOT` code.
///
/// ## Errors
/// - [`CatalogError::UnknownSignature`] if the code has no mapping. This is a catalog defect and should abort
///   generation.
pub fn tap_type(code: &str) -> Result<&'static str, CatalogError> {
    split(code).map(|[_, _, t]| elements::as_str(t))
}
