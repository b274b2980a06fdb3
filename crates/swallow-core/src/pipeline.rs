//! The scan pipeline: discovery, parallel parsing, extraction and aggregation.

use crate::aggregate::MetadataAggregator;
use crate::comments::CommentAssociator;
use crate::config::ScanConfig;
use crate::discovery::SourceDiscovery;
use crate::error::{ParseFailure, Result};
use crate::model::Document;
use crate::unit::{ParsedUnit, UnitParser};
use crate::walker::DeclarationWalker;
use rayon::prelude::*;
use std::path::PathBuf;

/// Outcome of a scan.
#[derive(Debug, Default)]
pub struct ScanReport {
    /// Canonical root that was scanned
    pub root: PathBuf,
    /// Extracted records in discovery order
    pub document: Document,
    /// Files that contributed nothing, in discovery order
    pub failures: Vec<ParseFailure>,
    /// Number of files handed to the parser
    pub files_scanned: usize,
}

/// Runs the full pipeline with a given parser back end.
pub struct Scanner<P: UnitParser> {
    config: ScanConfig,
    parser: P,
}

impl<P: UnitParser> Scanner<P> {
    pub fn new(config: ScanConfig, parser: P) -> Self {
        Self { config, parser }
    }

    /// Scan the configured root.
    ///
    /// Fails only if discovery fails or the worker pool cannot start; per-file
    /// parse failures are reported in [`ScanReport::failures`].
    pub fn run(&self) -> Result<ScanReport> {
        let discovery = SourceDiscovery::new(&self.config);
        let root = discovery.resolve_root()?;
        let files: Vec<PathBuf> = discovery.files()?.collect();
        tracing::debug!(
            "Discovered {} source files under {} ({} comment association)",
            files.len(),
            root.display(),
            self.config.association.as_str()
        );

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.jobs)
            .build()?;

        let mut parsed: Vec<(usize, std::result::Result<ParsedUnit, ParseFailure>)> = pool.install(|| {
            files
                .par_iter()
                .enumerate()
                .map(|(index, path)| (index, self.parser.parse_file(path)))
                .collect()
        });
        // Workers may finish in any order; restore discovery order.
        parsed.sort_by_key(|(index, _)| *index);

        let walker = DeclarationWalker::new();
        let associator = CommentAssociator::new(self.config.association);
        let mut aggregator = MetadataAggregator::new();
        let mut failures = Vec::new();

        for (_, result) in parsed {
            match result {
                Ok(unit) => {
                    let skeletons = walker.walk(&unit);
                    let comments = associator.associate(&unit);
                    tracing::debug!(
                        "Extracted {} classes and {} comments ({} unattached) from {}",
                        skeletons.len(),
                        unit.comments.len(),
                        comments.unattached().len(),
                        unit.file_path()
                    );
                    aggregator.push_unit(skeletons, &comments);
                }
                Err(failure) => {
                    tracing::debug!("Skipping {}", failure);
                    failures.push(failure);
                }
            }
        }

        tracing::info!(
            "Scanned {} files: {} classes, {} failures",
            files.len(),
            aggregator.len(),
            failures.len()
        );

        Ok(ScanReport {
            root,
            document: aggregator.finish(),
            failures,
            files_scanned: files.len(),
        })
    }
}
