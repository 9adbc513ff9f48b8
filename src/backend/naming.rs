//! Code-derived symbol names.
//!
//! Both artifacts take every name from one [`SymbolNames`], so a declaration in the header and its definition in the
//! implementation can never drift apart. The family stem (`gr_fir` by default) is the only input besides the
//! signature code.
//!
//! ## Examples
//! ```rust
//! use firgen::backend::naming::SymbolNames;
//!
//! let names = SymbolNames::new("gr_fir");
//! assert_eq!(names.create_entry("ccf"), "create_gr_fir_ccf");
//! assert_eq!(names.info_entry("ccf"), "get_gr_fir_ccf_info");
//! assert_eq!(names.include_guard(), "INCLUDED_GR_FIR_UTIL_H");
//! ```

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolNames {
    family: String,
}

impl SymbolNames {
    pub fn new(family: &str) -> Self {
        Self {
            family: family.to_string(),
        }
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    /// Opaque filter type, e.g. `gr_fir_ccf`.
    pub fn filter_type(&self, code: &str) -> String {
        format!("{}_{}", self.family, code)
    }

    /// Info-record type, e.g. `gr_fir_ccf_info`.
    pub fn info_record(&self, code: &str) -> String {
        format!("{}_{}_info", self.family, code)
    }

    /// Creation entry point, e.g. `create_gr_fir_ccf`.
    pub fn create_entry(&self, code: &str) -> String {
        format!("create_{}_{}", self.family, code)
    }

    /// Info-enumeration entry point, e.g. `get_gr_fir_ccf_info`.
    pub fn info_entry(&self, code: &str) -> String {
        format!("get_{}_{}_info", self.family, code)
    }

    /// Placeholder spelling used in prose, e.g. `gr_fir_XXX`.
    pub fn filter_placeholder(&self) -> String {
        format!("{}_XXX", self.family)
    }

    /// Aggregate container holding the static entry points.
    pub fn container(&self) -> String {
        format!("{}_util", self.family)
    }

    /// File name of the interface artifact.
    pub fn header_file(&self) -> String {
        format!("{}_util.h", self.family)
    }

    /// File name of the implementation artifact.
    pub fn implementation_file(&self) -> String {
        format!("{}_util.cc", self.family)
    }

    pub fn include_guard(&self) -> String {
        format!("INCLUDED_{}_UTIL_H", self.family.to_ascii_uppercase())
    }

    /// Default accessor expression for the registry singleton.
    pub fn registry_accessor(&self) -> String {
        format!("{}_sysconfig_singleton()", self.family)
    }

    /// Default interface header of the registry.
    pub fn registry_header(&self) -> String {
        format!("{}_sysconfig.h", self.family)
    }
}

impl Default for SymbolNames {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_FAMILY)
    }
}

/// Whether `name` is usable as a C identifier stem.
pub fn is_c_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => chars.all(|c| c.is_ascii_alphanumeric() || c == '_'),
        _ => false,
    }
}
