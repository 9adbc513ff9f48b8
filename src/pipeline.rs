//! Generation pipeline
//!
//! `render` is pure; `generate` renders both artifacts and hands them to a sink in one call; `check` compares a fresh
//! render against what is already on disk.
//!
//! Catalog defects are caught when the catalog is built and configuration defects in `render`, so by the time a
//! sink sees anything the run can no longer fail for a reason other than IO.

use std::fs;
use std::io;
use std::path::PathBuf;

use firgen_core::SignatureCatalog;

use crate::backend::{Artifact, ArtifactEmitter, ArtifactSink, HeaderEmitter, ImplementationEmitter, SymbolNames};
use crate::config::GeneratorConfig;
use crate::errors::{GenError, GenResult};

/// Render the interface and implementation artifacts, in that order.
#[tracing::instrument(skip_all, fields(family = %config.family, signatures = catalog.len()))]
pub fn render(catalog: &SignatureCatalog, config: &GeneratorConfig) -> GenResult<[Artifact; 2]> {
    config.validate()?;
    let names = config.names();
    let header = HeaderEmitter::new(catalog, &names, config);
    let implementation = ImplementationEmitter::new(catalog, &names, config);
    let emitters: [&dyn ArtifactEmitter; 2] = [&header, &implementation];
    Ok(emitters.map(|e| e.emit()))
}

/// Render both artifacts and publish them through `sink`.
///
/// ## Errors
/// - [`GenError::InvalidConfig`] before anything is rendered.
/// - [`GenError::SinkUnavailable`] if the sink cannot take the artifacts; a [`crate::backend::DirectorySink`] leaves
///   no partial pair behind in that case.
pub fn generate(
    catalog: &SignatureCatalog,
    config: &GeneratorConfig,
    sink: &mut dyn ArtifactSink,
) -> GenResult<Vec<PathBuf>> {
    let artifacts = render(catalog, config)?;
    let paths = sink.publish(&artifacts)?;
    tracing::info!(count = paths.len(), "generation complete");
    Ok(paths)
}

/// Why an artifact on disk does not match a fresh render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaleReason {
    Missing,
    Outdated,
}

/// An artifact on disk that needs regenerating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaleArtifact {
    pub path: PathBuf,
    pub reason: StaleReason,
}

/// Compare a fresh render against the files in `config.output_dir`.
///
/// Returns the stale artifacts; an empty list means the directory is up to date. Nothing is written.
pub fn check(catalog: &SignatureCatalog, config: &GeneratorConfig) -> GenResult<Vec<StaleArtifact>> {
    let mut stale = Vec::new();
    for artifact in render(catalog, config)? {
        let path = config.output_dir.join(artifact.name());
        // Compared as bytes: a file that is not even UTF-8 is just out of date.
        let reason = match fs::read(&path) {
            Ok(existing) if existing == artifact.contents().as_bytes() => continue,
            Ok(_) => StaleReason::Outdated,
            Err(e) if e.kind() == io::ErrorKind::NotFound => StaleReason::Missing,
            Err(source) => return Err(GenError::SinkUnavailable { path, source }),
        };
        tracing::debug!(path = %path.display(), ?reason, "stale artifact");
        stale.push(StaleArtifact { path, reason });
    }
    Ok(stale)
}

/// The pair of registry entry points one signature relies on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractEntry {
    pub code: String,
    pub filter_type: String,
    pub info_record: String,
    pub tap_type: String,
    pub create_entry: String,
    pub info_entry: String,
}

/// What the registry must expose for the generated layer to link, in catalog order.
pub fn registry_contract(catalog: &SignatureCatalog, names: &SymbolNames) -> Vec<ContractEntry> {
    catalog
        .iter()
        .map(|d| ContractEntry {
            code: d.code().to_string(),
            filter_type: names.filter_type(d.code()),
            info_record: names.info_record(d.code()),
            tap_type: d.tap_type().to_string(),
            create_entry: names.create_entry(d.code()),
            info_entry: names.info_entry(d.code()),
        })
        .collect()
}
