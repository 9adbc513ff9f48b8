//! Generator configuration
//!
//! Everything that shapes the artifacts besides the catalog: the family stem the names derive from, where the files
//! go, the license banner, and which registry the generated layer forwards to.

use std::path::{Path, PathBuf};

use crate::backend::naming::{SymbolNames, is_c_identifier};
use crate::errors::{GenError, GenResult};

/// Family stem used when none is configured.
pub const DEFAULT_FAMILY: &str = "gr_fir";

/// Header that declares the element types (`gr_complex` and friends).
pub const DEFAULT_TYPES_HEADER: &str = "gr_types.h";

/// Name written into the "generated file" banner.
pub const GENERATOR_NAME: &str = "firgen";

/// License banner placed at the top of both artifacts.
pub const DEFAULT_LICENSE: &str = "\
/* -*- c++ -*- */
/*
 * Copyright 2003,2004 Free Software Foundation, Inc.
 *
 * This file is part of GNU Radio
 *
 * GNU Radio is free software; you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation; either version 2, or (at your option)
 * any later version.
 *
 * GNU Radio is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with GNU Radio; see the file COPYING.  If not, write to
 * the Free Software Foundation, Inc., 51 Franklin Street,
 * Boston, MA 02110-1301, USA.
 */
";

/// The registry the generated entry points delegate to.
///
/// The implementation artifact never names a registry on its own; it only uses the accessor and header given here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryBinding {
    /// Expression yielding a pointer to the registry, e.g. `gr_fir_sysconfig_singleton()`.
    pub accessor: String,
    /// Header declaring the registry interface.
    pub header: String,
}

impl RegistryBinding {
    pub fn new(accessor: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            accessor: accessor.into(),
            header: header.into(),
        }
    }

    /// The conventional registry for a family.
    pub fn for_names(names: &SymbolNames) -> Self {
        Self::new(names.registry_accessor(), names.registry_header())
    }
}

/// Generator configuration
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Stem every generated symbol derives from
    pub family: String,
    /// Directory the artifacts are written to
    pub output_dir: PathBuf,
    /// Header included for the element types
    pub types_header: String,
    /// License banner (a complete C comment)
    pub license: String,
    /// Registry override; `None` means the family's conventional registry
    pub registry: Option<RegistryBinding>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            family: DEFAULT_FAMILY.to_string(),
            output_dir: PathBuf::from("."),
            types_header: DEFAULT_TYPES_HEADER.to_string(),
            license: DEFAULT_LICENSE.to_string(),
            registry: None,
        }
    }
}

impl GeneratorConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_family(mut self, family: impl Into<String>) -> Self {
        self.family = family.into();
        self
    }

    pub fn with_output_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.output_dir = dir.as_ref().to_path_buf();
        self
    }

    pub fn with_types_header(mut self, header: impl Into<String>) -> Self {
        self.types_header = header.into();
        self
    }

    pub fn with_license(mut self, license: impl Into<String>) -> Self {
        self.license = license.into();
        self
    }

    pub fn with_registry(mut self, registry: RegistryBinding) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Symbol names for the configured family.
    pub fn names(&self) -> SymbolNames {
        SymbolNames::new(&self.family)
    }

    /// The registry the implementation delegates to.
    pub fn registry_binding(&self) -> RegistryBinding {
        self.registry
            .clone()
            .unwrap_or_else(|| RegistryBinding::for_names(&self.names()))
    }

    /// Check that the configuration can produce compilable artifacts.
    pub fn validate(&self) -> GenResult<()> {
        if !is_c_identifier(&self.family) {
            return Err(GenError::InvalidConfig(format!(
                "family `{}` is not a C identifier",
                self.family
            )));
        }
        if self.types_header.trim().is_empty() {
            return Err(GenError::InvalidConfig("types header must not be empty".to_string()));
        }
        let registry = self.registry_binding();
        if registry.accessor.trim().is_empty() || registry.header.trim().is_empty() {
            return Err(GenError::InvalidConfig(
                "registry accessor and header must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
