//! Parser-independent syntactic model of one source file.
//!
//! Back ends lower their own syntax trees into [`ParsedUnit`]; everything
//! downstream of parsing only ever sees these types.

use crate::error::ParseFailure;
use crate::model::UNKNOWN_PATH;
use std::path::{Path, PathBuf};

/// Byte and line range of a node (lines are 1-indexed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start_byte: usize,
    pub end_byte: usize,
    pub start_line: usize,
    pub end_line: usize,
}

impl Span {
    pub fn new(start_byte: usize, end_byte: usize, start_line: usize, end_line: usize) -> Self {
        Self {
            start_byte,
            end_byte,
            start_line,
            end_line,
        }
    }

    /// Whether `other` lies entirely within this span.
    pub fn contains(&self, other: &Span) -> bool {
        self.start_byte <= other.start_byte && other.end_byte <= self.end_byte
    }
}

/// Kind of type declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    Class,
    Interface,
    Enum,
    Record,
    Annotation,
}

impl DeclarationKind {
    /// Classes and interfaces are the only kinds that produce records.
    pub fn is_class_like(&self) -> bool {
        match self {
            DeclarationKind::Class | DeclarationKind::Interface => true,
            DeclarationKind::Enum | DeclarationKind::Record | DeclarationKind::Annotation => false,
        }
    }
}

/// A method declared directly in a type body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDeclaration {
    pub name: String,
    pub span: Span,
}

impl MethodDeclaration {
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Self {
            name: name.into(),
            span,
        }
    }
}

/// A named (or, after error recovery, unnamed) type declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDeclaration {
    pub kind: DeclarationKind,
    pub name: Option<String>,
    pub span: Span,
    /// Direct methods in source order
    pub methods: Vec<MethodDeclaration>,
    /// Member types in source order
    pub nested: Vec<TypeDeclaration>,
}

impl TypeDeclaration {
    pub fn new(kind: DeclarationKind, name: Option<String>, span: Span) -> Self {
        Self {
            kind,
            name,
            span,
            methods: Vec::new(),
            nested: Vec::new(),
        }
    }

    /// Number of declarations in this subtree, including `self`.
    pub fn subtree_len(&self) -> usize {
        1 + self.nested.iter().map(TypeDeclaration::subtree_len).sum::<usize>()
    }
}

/// Lexical form of a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommentKind {
    /// `// ...`
    Line,
    /// `/* ... */`
    Block,
    /// `/** ... */`
    Doc,
}

/// A comment token with its delimiters removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentToken {
    pub kind: CommentKind,
    /// Content between the delimiters, not yet trimmed
    pub text: String,
    pub span: Span,
}

impl CommentToken {
    pub fn new(kind: CommentKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    /// Split raw comment source into kind and content.
    ///
    /// Returns `None` if `raw` is not delimited like a comment.
    pub fn from_source(raw: &str, span: Span) -> Option<Self> {
        let (kind, text) = if let Some(rest) = raw.strip_prefix("//") {
            (CommentKind::Line, rest.trim_end_matches(['\r', '\n']))
        } else if raw == "/**/" {
            (CommentKind::Block, "")
        } else if let Some(rest) = raw.strip_prefix("/**") {
            (CommentKind::Doc, rest.strip_suffix("*/")?)
        } else if let Some(rest) = raw.strip_prefix("/*") {
            (CommentKind::Block, rest.strip_suffix("*/")?)
        } else {
            return None;
        };
        Some(Self::new(kind, text, span))
    }

    /// Content with surrounding whitespace removed.
    pub fn trimmed(&self) -> &str {
        self.text.trim()
    }
}

/// Result of parsing one file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedUnit {
    /// Where the unit was read from
    pub storage: Option<PathBuf>,
    /// Top-level type declarations in source order
    pub types: Vec<TypeDeclaration>,
    /// Every comment in the file, in source order
    pub comments: Vec<CommentToken>,
}

impl ParsedUnit {
    pub fn new(storage: Option<PathBuf>) -> Self {
        Self {
            storage,
            types: Vec::new(),
            comments: Vec::new(),
        }
    }

    /// Path used in output records.
    pub fn file_path(&self) -> String {
        self.storage
            .as_deref()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_else(|| UNKNOWN_PATH.to_string())
    }

    /// Total number of type declarations in the unit.
    pub fn declaration_count(&self) -> usize {
        self.types.iter().map(TypeDeclaration::subtree_len).sum()
    }
}

/// A parsing back end.
///
/// Implementations must be pure: no state survives between calls, so one
/// instance can serve many worker threads at once.
pub trait UnitParser: Send + Sync {
    /// Parse source text; `storage` is recorded in the unit and in any failure.
    fn parse_source(&self, source: &str, storage: Option<&Path>) -> Result<ParsedUnit, ParseFailure>;

    /// Read and parse a file.
    fn parse_file(&self, path: &Path) -> Result<ParsedUnit, ParseFailure> {
        let bytes = std::fs::read(path)
            .map_err(|e| ParseFailure::new(Some(path), format!("failed to read file: {}", e)))?;
        let source = String::from_utf8(bytes)
            .map_err(|e| ParseFailure::new(Some(path), format!("invalid UTF-8: {}", e.utf8_error())))?;
        self.parse_source(&source, Some(path))
    }
}
