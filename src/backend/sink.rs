//! Output sinks for generated artifacts.
//!
//! Publishing is all-or-nothing: [`DirectorySink`] stages every artifact as a hidden temporary sibling and only
//! renames them into place once every write succeeded. Files being replaced are kept aside until the whole set is in
//! place and restored if a rename fails, so a failed run leaves the directory as it found it.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use super::artifact::Artifact;
use crate::errors::{GenError, GenResult};

/// Destination for a set of artifacts produced by one run.
pub trait ArtifactSink {
    /// Publish all artifacts, returning where each one ended up (in input order).
    fn publish(&mut self, artifacts: &[Artifact]) -> GenResult<Vec<PathBuf>>;
}

/// Writes artifacts into a directory, creating or truncating each file.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Final location of an artifact.
    pub fn destination(&self, artifact: &Artifact) -> PathBuf {
        self.dir.join(artifact.name())
    }

    fn staging_path(&self, artifact: &Artifact) -> PathBuf {
        self.dir.join(format!(".{}.tmp", artifact.name()))
    }

    /// Write one artifact to its staging path.
    fn stage(&self, artifact: &Artifact) -> GenResult<PathBuf> {
        let staged = self.staging_path(artifact);
        let write = || -> io::Result<()> {
            let mut out = BufWriter::new(File::create(&staged)?);
            for fragment in artifact.fragments() {
                out.write_all(fragment.as_bytes())?;
            }
            out.flush()
        };
        if let Err(source) = write() {
            discard(std::slice::from_ref(&staged));
            return Err(GenError::SinkUnavailable {
                path: self.destination(artifact),
                source,
            });
        }
        tracing::debug!(path = %staged.display(), bytes = artifact.len(), "staged artifact");
        Ok(staged)
    }
}

impl ArtifactSink for DirectorySink {
    #[tracing::instrument(skip_all, fields(dir = %self.dir.display(), count = artifacts.len()))]
    fn publish(&mut self, artifacts: &[Artifact]) -> GenResult<Vec<PathBuf>> {
        let mut staged = Vec::with_capacity(artifacts.len());
        for artifact in artifacts {
            match self.stage(artifact) {
                Ok(path) => staged.push(path),
                Err(e) => {
                    discard(&staged);
                    return Err(e);
                }
            }
        }

        let published = match self.commit(artifacts, &staged) {
            Ok(published) => published,
            Err(e) => {
                discard(&staged);
                return Err(e);
            }
        };
        for dest in &published {
            tracing::info!(path = %dest.display(), "wrote artifact");
        }
        Ok(published)
    }
}

impl DirectorySink {
    fn backup_path(&self, artifact: &Artifact) -> PathBuf {
        self.dir.join(format!(".{}.bak", artifact.name()))
    }

    /// Move every staged file into place.
    ///
    /// Files being replaced are set aside first; if any step fails, the new files are removed and the old ones put
    /// back, so the directory holds either the complete new set or what it held before.
    fn commit(&self, artifacts: &[Artifact], staged: &[PathBuf]) -> GenResult<Vec<PathBuf>> {
        for artifact in artifacts {
            let dest = self.destination(artifact);
            if dest.is_dir() {
                return Err(GenError::SinkUnavailable {
                    path: dest,
                    source: io::Error::new(io::ErrorKind::IsADirectory, "destination is a directory"),
                });
            }
        }

        let mut backups: Vec<(PathBuf, PathBuf)> = Vec::new();
        let mut placed: Vec<PathBuf> = Vec::with_capacity(artifacts.len());
        let result = self.swap_in(artifacts, staged, &mut backups, &mut placed);

        let backup_paths: Vec<PathBuf> = backups.iter().map(|(_, backup)| backup.clone()).collect();
        match result {
            Ok(()) => {
                discard(&backup_paths);
                Ok(placed)
            }
            Err(e) => {
                discard(&placed);
                for (dest, backup) in &backups {
                    if let Err(err) = fs::rename(backup, dest) {
                        tracing::warn!(path = %dest.display(), error = %err, "could not restore replaced artifact");
                    }
                }
                Err(e)
            }
        }
    }

    fn swap_in(
        &self,
        artifacts: &[Artifact],
        staged: &[PathBuf],
        backups: &mut Vec<(PathBuf, PathBuf)>,
        placed: &mut Vec<PathBuf>,
    ) -> GenResult<()> {
        for (artifact, tmp) in artifacts.iter().zip(staged) {
            let dest = self.destination(artifact);
            if dest.exists() {
                let backup = self.backup_path(artifact);
                fs::rename(&dest, &backup).map_err(|source| GenError::SinkUnavailable {
                    path: dest.clone(),
                    source,
                })?;
                backups.push((dest.clone(), backup));
            }
            fs::rename(tmp, &dest).map_err(|source| GenError::SinkUnavailable {
                path: dest.clone(),
                source,
            })?;
            placed.push(dest);
        }
        Ok(())
    }
}

fn discard(paths: &[PathBuf]) {
    for path in paths {
        if let Err(e) = fs::remove_file(path) {
            tracing::debug!(path = %path.display(), error = %e, "could not remove temporary file");
        }
    }
}

/// Keeps published artifacts in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    artifacts: Vec<Artifact>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn artifacts(&self) -> &[Artifact] {
        &self.artifacts
    }

    pub fn get(&self, name: &str) -> Option<&Artifact> {
        self.artifacts.iter().find(|a| a.name() == name)
    }

    pub fn into_artifacts(self) -> Vec<Artifact> {
        self.artifacts
    }
}

impl ArtifactSink for MemorySink {
    fn publish(&mut self, artifacts: &[Artifact]) -> GenResult<Vec<PathBuf>> {
        // Same name means truncate, never append.
        for artifact in artifacts {
            self.artifacts.retain(|a| a.name() != artifact.name());
            self.artifacts.push(artifact.clone());
        }
        Ok(artifacts.iter().map(|a| PathBuf::from(a.name())).collect())
    }
}
