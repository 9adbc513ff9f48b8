//! Element-type vocabulary for `IOT` signature codes.
//!
//! A signature code such as `ccf` spells the input, output and tap element types with one letter each. This registry
//! maps those letters to the C++ spellings used in the generated artifacts.
//!
//! ## Examples
//! ```rust
//! use firgen_core::elements::{self, ElementTypeId};
//!
//! assert_eq!(elements::from_code('c'), Some(ElementTypeId::Complex));
//! assert_eq!(elements::as_str(ElementTypeId::Complex), "gr_complex");
//! assert_eq!(elements::from_code('x'), None);
//! ```

/// Stable identifier for filter element types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementTypeId {
    Short,
    Int,
    Float,
    Complex,
}

/// Metadata for one element type.
#[derive(Debug, Clone, Copy)]
pub struct ElementTypeInfo {
    pub id: ElementTypeId,
    /// Letter used inside signature codes.
    pub code: char,
    /// C++ spelling emitted into the artifacts.
    pub canonical: &'static str,
    pub description: &'static str,
}

/// Registry of element types, keyed by code letter.
pub const ELEMENT_TYPES: &[ElementTypeInfo] = &[
    info(ElementTypeId::Short, 's', "short", "16-bit signed integer samples."),
    info(ElementTypeId::Int, 'i', "int", "Native signed integer samples."),
    info(ElementTypeId::Float, 'f', "float", "Single-precision real samples."),
    info(ElementTypeId::Complex, 'c', "gr_complex", "Single-precision complex samples."),
];

/// Resolve a code letter to an [`ElementTypeId`].
///
/// ## Notes
/// - Matching is exact; `C` is not `c`.
pub fn from_code(code: char) -> Option<ElementTypeId> {
    ELEMENT_TYPES.iter().find(|t| t.code == code).map(|t| t.id)
}

/// Return the C++ spelling for an element type.
pub fn as_str(id: ElementTypeId) -> &'static str {
    info_for(id).canonical
}

/// Return the code letter for an element type.
pub fn code_for(id: ElementTypeId) -> char {
    info_for(id).code
}

/// Return the full metadata entry for an element type.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: ElementTypeId) -> &'static ElementTypeInfo {
    ELEMENT_TYPES
        .iter()
        .find(|t| t.id == id)
        .expect("element type info missing")
}

const fn info(id: ElementTypeId, code: char, canonical: &'static str, description: &'static str) -> ElementTypeInfo {
    ElementTypeInfo {
        id,
        code,
        canonical,
        description,
    }
}
