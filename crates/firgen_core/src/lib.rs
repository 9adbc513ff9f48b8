//! Signature vocabulary for the firgen FIR factory generator.
//!
//! This crate holds everything the emitters need to know about *which* filter signatures exist: the one-letter
//! element-type codes, the built-in signature list, the tap-type lookup, and the ordered [`SignatureCatalog`].
//!
//! ## Notes
//! - This crate is intentionally pure: no file IO, no CLI, no rendering. The emitters live in the `firgen` crate.
//! - A catalog is validated once when it is built. Everything downstream can assume codes are unique and every code
//!   has a tap type.
//!
//! ## Examples
//! ```rust
//! use firgen_core::SignatureCatalog;
//!
//! let catalog = SignatureCatalog::builtin().unwrap();
//! assert_eq!(catalog.tap_type("ccf").unwrap(), "float");
//! assert_eq!(catalog.iter().next().map(|d| d.code()), Some("ccc"));
//! ```

pub mod catalog;
pub mod elements;
pub mod errors;
pub mod signatures;

pub use catalog::{SignatureCatalog, SignatureDescriptor};
pub use errors::CatalogError;
