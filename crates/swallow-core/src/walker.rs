//! Declaration walking: parsed units to class record skeletons.

use crate::model::ClassRecord;
use crate::unit::{ParsedUnit, TypeDeclaration};

/// A record with methods filled in and comments still empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassSkeleton {
    /// Pre-order index of the declaration within its unit
    pub ordinal: usize,
    pub record: ClassRecord,
}

/// Walks top-level and nested type declarations.
#[derive(Debug, Default, Clone, Copy)]
pub struct DeclarationWalker;

impl DeclarationWalker {
    pub fn new() -> Self {
        Self
    }

    /// Produce one skeleton per named class-like declaration, in pre-order.
    pub fn walk(&self, unit: &ParsedUnit) -> Vec<ClassSkeleton> {
        let file_path = unit.file_path();
        let mut skeletons = Vec::new();
        let mut ordinal = 0;
        for decl in &unit.types {
            Self::walk_declaration(decl, &file_path, &mut ordinal, &mut skeletons);
        }
        skeletons
    }

    fn walk_declaration(
        decl: &TypeDeclaration,
        file_path: &str,
        ordinal: &mut usize,
        skeletons: &mut Vec<ClassSkeleton>,
    ) {
        let current = *ordinal;
        *ordinal += 1;

        if decl.kind.is_class_like() {
            if let Some(name) = decl.name.as_deref().filter(|n| !n.is_empty()) {
                let record = decl
                    .methods
                    .iter()
                    .fold(ClassRecord::new(name, file_path), |record, m| record.with_method(&m.name));
                skeletons.push(ClassSkeleton {
                    ordinal: current,
                    record,
                });
            }
        }

        // Enums and records can still hold nested classes.
        for nested in &decl.nested {
            Self::walk_declaration(nested, file_path, ordinal, skeletons);
        }
    }
}
