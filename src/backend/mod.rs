//! firgen backend
//!
//! Turns a validated signature catalog into the two generated C++ artifacts and publishes them.
//!
//! ## Module Organization
//!
//! - `naming` - Code-derived symbol names shared by both artifacts
//! - `source_writer` - Low-level C++ text builder
//! - `artifact` - Artifact type and the `ArtifactEmitter` seam
//! - `header` - Interface artifact (`gr_fir_util.h`)
//! - `implementation` - Delegating implementation artifact (`gr_fir_util.cc`)
//! - `sink` - All-or-nothing publishing to a directory or memory

pub mod artifact;
pub mod header;
pub mod implementation;
pub mod naming;
pub mod sink;
pub mod source_writer;

pub use artifact::{Artifact, ArtifactEmitter};
pub use header::HeaderEmitter;
pub use implementation::ImplementationEmitter;
pub use naming::SymbolNames;
pub use sink::{ArtifactSink, DirectorySink, MemorySink};

/// License banner as the first fragment of an artifact, ending in exactly one newline.
pub(crate) fn license_fragment(license: &str) -> String {
    let text = license.trim_end();
    if text.is_empty() {
        return String::new();
    }
    format!("{}\n", text)
}
