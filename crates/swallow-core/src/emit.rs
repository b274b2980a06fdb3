//! Document emission.

use crate::error::{Error, Result};
use crate::model::{ClassRecord, Document};
use std::path::Path;

/// Output format for a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// Pretty-printed JSON array
    #[default]
    Json,
    /// One plain-text summary block per class
    Text,
}

/// Serializes a finished document without altering it.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentEmitter {
    format: OutputFormat,
}

impl DocumentEmitter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Render the whole document in memory.
    pub fn render(&self, document: &Document) -> Result<Vec<u8>> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_vec_pretty(document)?),
            OutputFormat::Text => Ok(Self::to_text(document).into_bytes()),
        }
    }

    /// Render, then write to `path`. Nothing is created if rendering fails.
    pub fn write_to(&self, document: &Document, path: &Path) -> Result<()> {
        let bytes = self.render(document)?;
        std::fs::write(path, bytes)
            .map_err(|e| Error::Serialization(format!("cannot write {}: {}", path.display(), e)))
    }

    /// Read a JSON document written earlier.
    pub fn load(path: &Path) -> Result<Document> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Plain-text summary of every record, separated by blank lines.
    pub fn to_text(document: &Document) -> String {
        document
            .iter()
            .map(Self::record_text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn record_text(record: &ClassRecord) -> String {
        let mut text = format!("Class: {}\nFile: {}\nMethods:\n", record.class_name, record.file_path);
        for method in &record.methods {
            text.push_str(&format!("  - {}\n", method.method_name));
        }
        text.push_str("Comments:\n");
        for comment in &record.comments {
            text.push_str(&format!("  - {}\n", comment));
        }
        text
    }
}
