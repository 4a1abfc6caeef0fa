//! Output targets for generated sources

use crate::codegen::naming::source_path;
use crate::error::{GeneratorError, GeneratorResult};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Receives generated source units.
pub trait Filer {
    /// Create the source unit for a qualified class name.
    fn create_source(&mut self, qualified_name: &str, contents: &str) -> GeneratorResult<()>;
}

/// Writes sources under a root directory, one `.java` file per class in its
/// package directory.
#[derive(Debug, Clone)]
pub struct DirectoryFiler {
    root: PathBuf,
}

impl DirectoryFiler {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Full path a qualified class name is written to.
    pub fn path_for(&self, qualified_name: &str) -> PathBuf {
        self.root.join(source_path(qualified_name))
    }
}

impl Filer for DirectoryFiler {
    fn create_source(&mut self, qualified_name: &str, contents: &str) -> GeneratorResult<()> {
        let path = self.path_for(qualified_name);
        let write_error = |source| GeneratorError::OutputWrite {
            target: path.display().to_string(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_error)?;
        }
        fs::write(&path, contents).map_err(write_error)?;

        info!(class = qualified_name, path = %path.display(), "wrote generated source");
        Ok(())
    }
}

/// Keeps sources in memory, ordered by qualified name.
#[derive(Debug, Default)]
pub struct MemoryFiler {
    sources: BTreeMap<String, String>,
}

impl MemoryFiler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, qualified_name: &str) -> Option<&str> {
        self.sources.get(qualified_name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Qualified names and contents in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.sources.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Filer for MemoryFiler {
    fn create_source(&mut self, qualified_name: &str, contents: &str) -> GeneratorResult<()> {
        if self.sources.contains_key(qualified_name) {
            return Err(GeneratorError::DuplicateOutput {
                target: qualified_name.to_string(),
            });
        }
        self.sources
            .insert(qualified_name.to_string(), contents.to_string());
        Ok(())
    }
}
