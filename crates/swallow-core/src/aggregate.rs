//! Aggregation of per-unit results into a document.

use crate::comments::CommentAssignment;
use crate::model::{ClassRecord, Document};
use crate::walker::ClassSkeleton;

/// Accumulates class records in the order units are pushed.
///
/// Owned by the caller; there is no shared or global state.
#[derive(Debug, Default)]
pub struct MetadataAggregator {
    records: Vec<ClassRecord>,
}

impl MetadataAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one unit's skeletons with its comments and append them.
    pub fn push_unit(&mut self, skeletons: Vec<ClassSkeleton>, comments: &CommentAssignment) {
        self.records.extend(skeletons.into_iter().map(|skeleton| {
            let assigned = comments.comments_for(skeleton.ordinal);
            skeleton.record.with_comments(assigned)
        }));
    }

    /// Number of records collected so far.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Finish aggregation and hand over the document.
    pub fn finish(self) -> Document {
        self.records
    }
}
