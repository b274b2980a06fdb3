//! Output records: the document the pipeline produces.

use serde::{Deserialize, Serialize};

/// File path used when a unit has no storage location.
pub const UNKNOWN_PATH: &str = "Unknown";

/// A method declared directly on a class-like type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodRecord {
    pub method_name: String,
}

impl MethodRecord {
    pub fn new(method_name: impl Into<String>) -> Self {
        Self {
            method_name: method_name.into(),
        }
    }
}

/// Metadata for one class or interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassRecord {
    /// Declared identifier (never empty)
    pub class_name: String,
    /// Canonical path of the originating file, or [`UNKNOWN_PATH`]
    pub file_path: String,
    /// Trimmed comment text
    pub comments: Vec<String>,
    /// Directly declared methods in source order
    pub methods: Vec<MethodRecord>,
}

impl ClassRecord {
    /// Create a record with no comments and no methods.
    pub fn new(class_name: impl Into<String>, file_path: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            file_path: file_path.into(),
            comments: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Set the comments.
    pub fn with_comments(mut self, comments: Vec<String>) -> Self {
        self.comments = comments;
        self
    }

    /// Append a method.
    pub fn with_method(mut self, name: impl Into<String>) -> Self {
        self.methods.push(MethodRecord::new(name));
        self
    }
}

/// The ordered collection of class records: discovery order, then declaration order.
pub type Document = Vec<ClassRecord>;
