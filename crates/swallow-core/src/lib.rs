//! Swallow Core Library
//!
//! Data model, extraction stages and the scan pipeline for pulling class,
//! method and comment metadata out of a source tree.

pub mod aggregate;
pub mod comments;
pub mod config;
pub mod discovery;
pub mod emit;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod unit;
pub mod walker;

#[cfg(test)]
pub mod testutils;

pub use aggregate::MetadataAggregator;
pub use comments::{AssociationMode, CommentAssignment, CommentAssociator};
pub use config::ScanConfig;
pub use discovery::SourceDiscovery;
pub use emit::{DocumentEmitter, OutputFormat};
pub use error::{Error, ParseFailure, Result};
pub use model::{ClassRecord, Document, MethodRecord};
pub use pipeline::{ScanReport, Scanner};
pub use unit::{CommentKind, CommentToken, DeclarationKind, MethodDeclaration, ParsedUnit, Span, TypeDeclaration, UnitParser};
pub use walker::{ClassSkeleton, DeclarationWalker};
