//! Generated artifacts and the emitter seam.

/// A generated text file: a name plus the ordered fragments that make up its contents.
///
/// Fragments follow the catalog traversal that produced them; concatenating them in order gives the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    name: String,
    fragments: Vec<String>,
}

impl Artifact {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fragments: Vec::new(),
        }
    }

    /// Append a fragment. Empty fragments are dropped.
    pub fn push(&mut self, fragment: String) {
        if !fragment.is_empty() {
            self.fragments.push(fragment);
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    /// Full file contents.
    pub fn contents(&self) -> String {
        self.fragments.concat()
    }

    pub fn len(&self) -> usize {
        self.fragments.iter().map(String::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Something that renders one artifact from the catalog.
///
/// Emitting is pure: it never touches the filesystem, so it can run before any sink is opened.
pub trait ArtifactEmitter {
    /// File name the artifact is published under.
    fn file_name(&self) -> String;

    /// Render the artifact.
    fn emit(&self) -> Artifact;
}
