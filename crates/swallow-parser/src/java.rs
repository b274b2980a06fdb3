//! Java back end using tree-sitter.

use std::path::Path;
use swallow_core::{
    CommentToken, DeclarationKind, MethodDeclaration, ParseFailure, ParsedUnit, Span, TypeDeclaration, UnitParser,
};
use tree_sitter::{Node, TreeCursor};

/// Parses Java source into a [`ParsedUnit`].
///
/// A fresh `tree_sitter::Parser` is created for every call, so the type is
/// stateless and can be shared across worker threads.
#[derive(Debug, Default, Clone, Copy)]
pub struct JavaUnitParser;

impl JavaUnitParser {
    /// Create a new Java parser.
    pub fn new() -> Self {
        Self
    }

    fn declaration_kind(node_kind: &str) -> Option<DeclarationKind> {
        match node_kind {
            "class_declaration" => Some(DeclarationKind::Class),
            "interface_declaration" => Some(DeclarationKind::Interface),
            "enum_declaration" => Some(DeclarationKind::Enum),
            "record_declaration" => Some(DeclarationKind::Record),
            "annotation_type_declaration" => Some(DeclarationKind::Annotation),
            _ => None,
        }
    }

    fn extract_types(&self, parent: &Node, content: &str, types: &mut Vec<TypeDeclaration>) {
        let mut cursor = parent.walk();
        for child in parent.named_children(&mut cursor) {
            if let Some(kind) = Self::declaration_kind(child.kind()) {
                types.push(self.extract_declaration(&child, content, kind));
            }
        }
    }

    fn extract_declaration(&self, node: &Node, content: &str, kind: DeclarationKind) -> TypeDeclaration {
        let name = node
            .child_by_field_name("name")
            .and_then(|n| n.utf8_text(content.as_bytes()).ok())
            .map(String::from);

        let mut decl = TypeDeclaration::new(kind, name, span_of(node));
        if let Some(body) = node.child_by_field_name("body") {
            self.extract_members(&body, content, &mut decl);
        }
        decl
    }

    /// Direct members of a type body: methods and member types.
    ///
    /// Method bodies and initializers are never entered, so local and
    /// anonymous classes stay out of the model.
    fn extract_members(&self, body: &Node, content: &str, decl: &mut TypeDeclaration) {
        let mut cursor = body.walk();
        for member in body.named_children(&mut cursor) {
            match member.kind() {
                "method_declaration" => {
                    if let Some(name) = member
                        .child_by_field_name("name")
                        .and_then(|n| n.utf8_text(content.as_bytes()).ok())
                    {
                        decl.methods.push(MethodDeclaration::new(name, span_of(&member)));
                    }
                }
                // enum Foo { A, B; <declarations> }
                "enum_body_declarations" => self.extract_members(&member, content, decl),
                other => {
                    if let Some(kind) = Self::declaration_kind(other) {
                        decl.nested.push(self.extract_declaration(&member, content, kind));
                    }
                }
            }
        }
    }

    /// Collect every comment token in document order.
    ///
    /// Walks with a cursor rather than recursion: expression trees such as long
    /// string concatenations can be thousands of levels deep.
    fn extract_comments(&self, root: &Node, content: &str, comments: &mut Vec<CommentToken>) {
        let mut cursor = root.walk();
        loop {
            let node = cursor.node();
            let is_comment = matches!(node.kind(), "line_comment" | "block_comment" | "comment");
            if is_comment {
                if let Some(comment) = node
                    .utf8_text(content.as_bytes())
                    .ok()
                    .and_then(|raw| CommentToken::from_source(raw, span_of(&node)))
                {
                    comments.push(comment);
                }
            } else if cursor.goto_first_child() {
                continue;
            }
            if !advance(&mut cursor) {
                return;
            }
        }
    }
}

impl UnitParser for JavaUnitParser {
    fn parse_source(&self, content: &str, storage: Option<&Path>) -> Result<ParsedUnit, ParseFailure> {
        let mut parser = tree_sitter::Parser::new();
        parser
            .set_language(&tree_sitter_java::LANGUAGE.into())
            .map_err(|e| ParseFailure::new(storage, e.to_string()))?;

        let tree = parser
            .parse(content, None)
            .ok_or_else(|| ParseFailure::new(storage, "Failed to parse Java"))?;

        let root = tree.root_node();
        if root.has_error() {
            let cause = first_error(&root)
                .map(|n| describe_error(&n))
                .unwrap_or_else(|| "syntax error".to_string());
            return Err(ParseFailure::new(storage, cause));
        }

        let mut unit = ParsedUnit::new(storage.map(Path::to_path_buf));
        self.extract_types(&root, content, &mut unit.types);
        self.extract_comments(&root, content, &mut unit.comments);

        tracing::debug!(
            "Parsed {}: {} declarations, {} comments",
            unit.file_path(),
            unit.declaration_count(),
            unit.comments.len()
        );
        Ok(unit)
    }
}

fn span_of(node: &Node) -> Span {
    Span::new(
        node.start_byte(),
        node.end_byte(),
        node.start_position().row + 1,
        node.end_position().row + 1,
    )
}

/// First `ERROR` or `MISSING` node in document order.
fn first_error<'a>(root: &Node<'a>) -> Option<Node<'a>> {
    let mut cursor = root.walk();
    loop {
        let node = cursor.node();
        if node.is_error() || node.is_missing() {
            return Some(node);
        }
        // Only subtrees that contain an error are entered.
        if node.has_error() && cursor.goto_first_child() {
            continue;
        }
        if !advance(&mut cursor) {
            return None;
        }
    }
}

/// Move to the next node in pre-order that is not a descendant of the
/// current one. Returns `false` once the walk is back at the root.
fn advance(cursor: &mut TreeCursor) -> bool {
    loop {
        if cursor.goto_next_sibling() {
            return true;
        }
        if !cursor.goto_parent() {
            return false;
        }
    }
}

fn describe_error(node: &Node) -> String {
    let pos = node.start_position();
    if node.is_missing() {
        format!("missing `{}` at line {}, column {}", node.kind(), pos.row + 1, pos.column + 1)
    } else {
        format!("syntax error at line {}, column {}", pos.row + 1, pos.column + 1)
    }
}
