//! Script module source retrieval.

use std::collections::BTreeMap;
use std::io;
use std::path::PathBuf;

/// Storage collaborator that resolves a module identifier to script source.
pub trait ModuleSource: Send + Sync + 'static {
    /// Fetch the source text of a module.
    fn fetch(&self, module: &str) -> io::Result<String>;
}

/// Module source backed by a directory on disk.
#[derive(Debug, Clone)]
pub struct DirModuleSource {
    root: PathBuf,
}

impl DirModuleSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ModuleSource for DirModuleSource {
    fn fetch(&self, module: &str) -> io::Result<String> {
        std::fs::read_to_string(self.root.join(module))
    }
}

/// In-memory module source for tests and embedded script bundles.
#[derive(Debug, Clone, Default)]
pub struct MemoryModuleSource {
    modules: BTreeMap<String, String>,
}

impl MemoryModuleSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a module, replacing any previous source under the same name.
    pub fn with(mut self, module: impl Into<String>, source: impl Into<String>) -> Self {
        self.modules.insert(module.into(), source.into());
        self
    }
}

impl ModuleSource for MemoryModuleSource {
    fn fetch(&self, module: &str) -> io::Result<String> {
        self.modules.get(module).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("unknown module {module}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dir_source_reads_from_disk() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join("converters.js"), "var x = 1;").unwrap();

        let source = DirModuleSource::new(dir.path());
        assert_eq!(source.fetch("converters.js").unwrap(), "var x = 1;");
        assert!(source.fetch("missing.js").is_err());
    }

    #[test]
    fn memory_source_resolves_inserted_modules() {
        let source = MemoryModuleSource::new().with("a.js", "var a = 1;");
        assert_eq!(source.fetch("a.js").unwrap(), "var a = 1;");
        assert_eq!(
            source.fetch("b.js").unwrap_err().kind(),
            io::ErrorKind::NotFound
        );
    }
}
