//! Swallow Parser Library
//!
//! Tree-sitter based parsing that lowers source files into the parser-independent
//! [`swallow_core::ParsedUnit`] model.

pub mod java;

pub use java::JavaUnitParser;
