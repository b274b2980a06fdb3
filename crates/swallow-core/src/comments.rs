//! Comment association.
//!
//! Two granularities are supported. [`AssociationMode::Unit`] hands every
//! comment in a file to every record from that file. [`AssociationMode::Proximity`]
//! gives each comment to the single declaration it describes.

use crate::unit::{CommentToken, ParsedUnit, Span, TypeDeclaration};
use std::collections::BTreeMap;

/// How comments are attached to class records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AssociationMode {
    /// Every record in a unit carries all of the unit's comments
    #[default]
    Unit,
    /// Each comment goes to the nearest declaration it precedes or sits in
    Proximity,
}

impl AssociationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssociationMode::Unit => "unit",
            AssociationMode::Proximity => "proximity",
        }
    }
}

/// Comments of one unit, grouped by owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentAssignment {
    /// Shared by every declaration in the unit
    Unit(Vec<String>),
    /// Keyed by declaration ordinal (pre-order index)
    Proximity {
        owned: BTreeMap<usize, Vec<String>>,
        unattached: Vec<String>,
    },
}

impl CommentAssignment {
    /// Comments for the declaration with the given ordinal.
    pub fn comments_for(&self, ordinal: usize) -> Vec<String> {
        match self {
            CommentAssignment::Unit(all) => all.clone(),
            CommentAssignment::Proximity { owned, .. } => owned.get(&ordinal).cloned().unwrap_or_default(),
        }
    }

    /// Comments owned by no declaration.
    pub fn unattached(&self) -> &[String] {
        match self {
            CommentAssignment::Unit(_) => &[],
            CommentAssignment::Proximity { unattached, .. } => unattached,
        }
    }
}

/// Collects a unit's comment tokens and assigns them to declarations.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommentAssociator {
    mode: AssociationMode,
}

impl CommentAssociator {
    pub fn new(mode: AssociationMode) -> Self {
        Self { mode }
    }

    /// Every comment in the unit, trimmed, in source order.
    pub fn collect(unit: &ParsedUnit) -> Vec<String> {
        let mut tokens: Vec<&CommentToken> = unit.comments.iter().collect();
        tokens.sort_by_key(|c| c.span.start_byte);
        tokens.into_iter().map(|c| c.trimmed().to_string()).collect()
    }

    pub fn associate(&self, unit: &ParsedUnit) -> CommentAssignment {
        match self.mode {
            AssociationMode::Unit => CommentAssignment::Unit(Self::collect(unit)),
            AssociationMode::Proximity => Self::associate_by_proximity(unit),
        }
    }

    fn associate_by_proximity(unit: &ParsedUnit) -> CommentAssignment {
        let mut tokens: Vec<&CommentToken> = unit.comments.iter().collect();
        tokens.sort_by_key(|c| c.span.start_byte);

        let mut owned: BTreeMap<usize, Vec<String>> = BTreeMap::new();
        let mut unattached = Vec::new();
        for token in tokens {
            let text = token.trimmed().to_string();
            match owner_of(&token.span, &unit.types, 0, None) {
                Some(ordinal) => owned.entry(ordinal).or_default().push(text),
                None => unattached.push(text),
            }
        }
        CommentAssignment::Proximity { owned, unattached }
    }
}

/// Ordinal of the declaration owning `comment` within `scope`.
///
/// `first_ordinal` is the pre-order index of `scope[0]`; `enclosing` is the
/// declaration whose body `scope` is, if any.
fn owner_of(
    comment: &Span,
    scope: &[TypeDeclaration],
    first_ordinal: usize,
    enclosing: Option<(usize, &TypeDeclaration)>,
) -> Option<usize> {
    let mut ordinal = first_ordinal;
    for decl in scope {
        if decl.span.contains(comment) {
            return owner_of(comment, &decl.nested, ordinal + 1, Some((ordinal, decl)));
        }
        ordinal += decl.subtree_len();
    }

    if let Some((enclosing_ordinal, enclosing_decl)) = enclosing {
        if enclosing_decl.methods.iter().any(|m| m.span.contains(comment)) {
            return Some(enclosing_ordinal);
        }
    }

    let mut ordinal = first_ordinal;
    for decl in scope {
        if decl.span.start_byte >= comment.end_byte {
            let blocked = enclosing
                .map(|(_, e)| {
                    e.methods
                        .iter()
                        .any(|m| m.span.start_byte >= comment.end_byte && m.span.end_byte <= decl.span.start_byte)
                })
                .unwrap_or(false);
            if !blocked {
                return Some(ordinal);
            }
            break;
        }
        ordinal += decl.subtree_len();
    }

    enclosing.map(|(enclosing_ordinal, _)| enclosing_ordinal)
}
