//! Test utilities for Swallow.
//!
//! Builds parsed units by hand so the walker, associator and aggregator can be
//! tested without a parser back end.

use crate::unit::{CommentKind, CommentToken, DeclarationKind, MethodDeclaration, ParsedUnit, Span, TypeDeclaration};
use std::path::PathBuf;

/// Test fixture for creating sample units.
pub struct TestFixtures;

impl TestFixtures {
    /// A span covering `start..end` bytes on line 1.
    pub fn span(start: usize, end: usize) -> Span {
        Span::new(start, end, 1, 1)
    }

    /// A declaration whose methods occupy one byte each just after `start`.
    pub fn declaration(
        kind: DeclarationKind,
        name: Option<&str>,
        start: usize,
        end: usize,
        methods: &[&str],
    ) -> TypeDeclaration {
        let mut decl = TypeDeclaration::new(kind, name.map(String::from), Self::span(start, end));
        decl.methods = methods
            .iter()
            .enumerate()
            .map(|(i, m)| MethodDeclaration::new(*m, Self::span(start + 1 + i, start + 2 + i)))
            .collect();
        decl
    }

    /// A named class.
    pub fn class(name: &str, start: usize, end: usize, methods: &[&str]) -> TypeDeclaration {
        Self::declaration(DeclarationKind::Class, Some(name), start, end, methods)
    }

    /// A method at an explicit position.
    pub fn method(name: &str, start: usize, end: usize) -> MethodDeclaration {
        MethodDeclaration::new(name, Self::span(start, end))
    }

    /// A line comment with the given content.
    pub fn comment(text: &str, start: usize, end: usize) -> CommentToken {
        CommentToken::new(CommentKind::Line, format!(" {}", text), Self::span(start, end))
    }

    /// A unit stored at `path`.
    pub fn unit(path: &str, types: Vec<TypeDeclaration>, comments: Vec<CommentToken>) -> ParsedUnit {
        ParsedUnit {
            storage: Some(PathBuf::from(path)),
            types,
            comments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_fixture() {
        let decl = TestFixtures::class("Foo", 10, 50, &["a", "b"]);
        assert_eq!(decl.name.as_deref(), Some("Foo"));
        assert_eq!(decl.methods.len(), 2);
        assert!(decl.span.contains(&decl.methods[1].span));
    }

    #[test]
    fn test_comment_fixture() {
        let comment = TestFixtures::comment("note", 0, 7);
        assert_eq!(comment.trimmed(), "note");
    }
}
