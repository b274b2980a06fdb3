//! Scan configuration.

use crate::comments::AssociationMode;
use std::path::{Path, PathBuf};

/// Directory names never descended into.
pub const DEFAULT_IGNORED_DIRS: &[&str] = &["target", "build", "out", "node_modules", ".git", ".gradle", ".idea"];

/// Settings for one scan.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Root directory to scan
    pub root: PathBuf,
    /// File extensions treated as source (without the dot)
    pub extensions: Vec<String>,
    /// Directory names skipped during traversal
    pub ignored_dirs: Vec<String>,
    /// How comments are attached to records
    pub association: AssociationMode,
    /// Parser threads; 0 means one per core
    pub jobs: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            extensions: vec!["java".to_string()],
            ignored_dirs: DEFAULT_IGNORED_DIRS.iter().map(|s| s.to_string()).collect(),
            association: AssociationMode::default(),
            jobs: 0,
        }
    }
}

impl ScanConfig {
    /// Create a configuration for the given root with defaults elsewhere.
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            ..Self::default()
        }
    }

    /// Replace the extension list.
    pub fn with_extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = extensions
            .into_iter()
            .map(|e| e.trim_start_matches('.').to_ascii_lowercase())
            .collect();
        self
    }

    /// Skip additional directory names.
    pub fn with_ignored_dirs(mut self, dirs: Vec<String>) -> Self {
        self.ignored_dirs.extend(dirs);
        self
    }

    /// Set the comment association mode.
    pub fn with_association(mut self, association: AssociationMode) -> Self {
        self.association = association;
        self
    }

    /// Set the number of parser threads.
    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs;
        self
    }

    /// Whether a file extension is scanned.
    pub fn is_source_extension(&self, ext: &str) -> bool {
        self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext))
    }

    /// Whether a directory name is skipped.
    pub fn is_ignored_dir(&self, name: &str) -> bool {
        self.ignored_dirs.iter().any(|d| d == name)
    }
}
