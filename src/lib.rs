#![forbid(unsafe_code)]
//! firgen: FIR filter factory generator
//!
//! From an ordered list of filter signatures, firgen emits a matched pair of C++ artifacts: an interface
//! (`gr_fir_util.h`) declaring one creation entry and one info entry per signature, and an implementation
//! (`gr_fir_util.cc`) whose every function forwards to a single runtime registry.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` with `?` / `map_err`. The `cli` module enforces `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! ## Examples
//! ```rust
//! use firgen::backend::MemorySink;
//! use firgen::{GeneratorConfig, SignatureCatalog, generate};
//!
//! let mut sink = MemorySink::new();
//! generate(&SignatureCatalog::builtin().unwrap(), &GeneratorConfig::default(), &mut sink).unwrap();
//! let header = sink.get("gr_fir_util.h").unwrap().contents();
//! assert!(header.contains("static gr_fir_ccf *create_gr_fir_ccf (const std::vector<float> &taps);"));
//! ```

pub mod backend;
pub mod catalog_file;
pub mod cli;
pub mod config;
pub mod errors;
pub mod pipeline;
pub mod version;

pub use firgen_core::{CatalogError, SignatureCatalog, SignatureDescriptor};

pub use catalog_file::CatalogFile;
pub use config::{GeneratorConfig, RegistryBinding};
pub use errors::{GenError, GenResult};
pub use pipeline::{check, generate, registry_contract, render};
