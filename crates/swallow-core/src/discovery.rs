//! Source file discovery.

use crate::config::ScanConfig;
use crate::error::{Error, Result};
use std::path::PathBuf;
use walkdir::{DirEntry, WalkDir};

/// Enumerates candidate source files under a root directory.
///
/// Traversal is sorted by file name, so repeated walks of an unchanged tree
/// yield the same sequence.
pub struct SourceDiscovery {
    config: ScanConfig,
}

impl SourceDiscovery {
    /// Create a discovery for the root named in `config`.
    pub fn new(config: &ScanConfig) -> Self {
        Self { config: config.clone() }
    }

    /// Canonical root, failing if it is missing, not a directory, or unreadable.
    pub fn resolve_root(&self) -> Result<PathBuf> {
        let root = &self.config.root;
        let root = root
            .canonicalize()
            .map_err(|e| Error::Discovery(format!("cannot access {}: {}", root.display(), e)))?;
        if !root.is_dir() {
            return Err(Error::Discovery(format!("{} is not a directory", root.display())));
        }
        std::fs::read_dir(&root)
            .map_err(|e| Error::Discovery(format!("cannot read {}: {}", root.display(), e)))?;
        Ok(root)
    }

    /// Lazily walk the tree. Each call starts a fresh walk.
    pub fn files(&self) -> Result<impl Iterator<Item = PathBuf>> {
        let root = self.resolve_root()?;
        let filter_config = self.config.clone();
        let config = self.config.clone();

        let walker = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(move |e| e.depth() == 0 || !(is_hidden(e) || is_ignored(e, &filter_config)));

        Ok(walker.filter_map(move |entry| {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    tracing::warn!("Error walking directory: {}", e);
                    return None;
                }
            };
            if !entry.file_type().is_file() {
                return None;
            }
            let is_source = entry
                .path()
                .extension()
                .and_then(|e| e.to_str())
                .map(|ext| config.is_source_extension(ext))
                .unwrap_or(false);
            is_source.then(|| entry.into_path())
        }))
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|s| s.starts_with('.'))
        .unwrap_or(false)
}

fn is_ignored(entry: &DirEntry, config: &ScanConfig) -> bool {
    entry.file_type().is_dir() && config.is_ignored_dir(entry.file_name().to_str().unwrap_or(""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs::{self, File};
    use std::path::Path;
    use tempfile::tempdir;

    fn relative(root: &Path, files: Vec<PathBuf>) -> Vec<String> {
        let root = root.canonicalize().unwrap();
        files
            .iter()
            .map(|f| f.strip_prefix(&root).unwrap().to_string_lossy().replace('\\', "/"))
            .collect()
    }

    #[test]
    fn test_discovers_java_files_in_lexicographic_order() {
        let dir = tempdir().unwrap();
        let root = dir.path();

        fs::create_dir_all(root.join("com/acme")).unwrap();
        File::create(root.join("com/acme/Zeta.java")).unwrap();
        File::create(root.join("com/acme/Alpha.java")).unwrap();
        File::create(root.join("Main.java")).unwrap();
        File::create(root.join("README.md")).unwrap();

        let discovery = SourceDiscovery::new(&ScanConfig::new(root));
        let files = relative(root, discovery.files().unwrap().collect());

        assert_eq!(files, vec!["Main.java", "com/acme/Alpha.java", "com/acme/Zeta.java"]);
    }

    #[test]
    fn test_skips_hidden_and_ignored_dirs() {
        let dir = tempdir().unwrap();
        let root = dir.path();

        fs::create_dir_all(root.join(".hidden")).unwrap();
        File::create(root.join(".hidden/Secret.java")).unwrap();
        fs::create_dir_all(root.join("target/classes")).unwrap();
        File::create(root.join("target/classes/Built.java")).unwrap();
        fs::create_dir_all(root.join("generated")).unwrap();
        File::create(root.join("generated/Gen.java")).unwrap();
        File::create(root.join("App.java")).unwrap();

        let config = ScanConfig::new(root).with_ignored_dirs(vec!["generated".to_string()]);
        let files = relative(root, SourceDiscovery::new(&config).files().unwrap().collect());

        assert_eq!(files, vec!["App.java"]);
    }

    #[test]
    fn test_discovery_is_restartable() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("A.java")).unwrap();
        File::create(dir.path().join("B.java")).unwrap();

        let discovery = SourceDiscovery::new(&ScanConfig::new(dir.path()));
        let first: Vec<_> = discovery.files().unwrap().collect();
        let second: Vec<_> = discovery.files().unwrap().collect();

        assert_eq!(first.len(), 2);
        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_extensions() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("A.java")).unwrap();
        File::create(dir.path().join("B.jav")).unwrap();

        let config = ScanConfig::new(dir.path()).with_extensions(vec!["jav".to_string()]);
        let files = relative(dir.path(), SourceDiscovery::new(&config).files().unwrap().collect());

        assert_eq!(files, vec!["B.jav"]);
    }

    #[test]
    fn test_extension_match_ignores_case_and_ignored_names_only_apply_to_dirs() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("Upper.JAVA")).unwrap();
        File::create(dir.path().join("build.java")).unwrap();
        fs::create_dir_all(dir.path().join("build")).unwrap();
        File::create(dir.path().join("build/Skipped.java")).unwrap();

        let files = relative(dir.path(), SourceDiscovery::new(&ScanConfig::new(dir.path())).files().unwrap().collect());

        assert_eq!(files, vec!["Upper.JAVA", "build.java"]);
    }

    #[test]
    fn test_missing_root_is_discovery_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope");

        let result = SourceDiscovery::new(&ScanConfig::new(&missing)).files();
        assert!(matches!(result, Err(Error::Discovery(_))));
    }

    #[test]
    fn test_file_root_is_discovery_error() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("A.java");
        File::create(&file).unwrap();

        let result = SourceDiscovery::new(&ScanConfig::new(&file)).files();
        assert!(matches!(result, Err(Error::Discovery(_))));
    }
}
