//! Scan command implementation.

use anyhow::{Context, Result};
use colored::Colorize;
use std::io::Write;
use std::path::PathBuf;
use swallow_core::{AssociationMode, DocumentEmitter, OutputFormat, ScanConfig, Scanner};
use swallow_parser::JavaUnitParser;

/// Options for the scan command.
pub struct ScanOptions {
    pub path: PathBuf,
    /// `None` writes to stdout
    pub output: Option<PathBuf>,
    pub format: OutputFormat,
    pub association: AssociationMode,
    pub jobs: usize,
    pub extensions: Vec<String>,
    pub ignored: Vec<String>,
    pub quiet: bool,
}

/// Run the scan command.
pub fn run(options: ScanOptions) -> Result<()> {
    // Progress goes to stderr when the document itself goes to stdout.
    let progress = !options.quiet;
    let to_stdout = options.output.is_none();

    if progress {
        let line = format!("{} Scanning {}", "→".blue(), options.path.display());
        if to_stdout {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }

    let config = ScanConfig::new(&options.path)
        .with_extensions(options.extensions)
        .with_ignored_dirs(options.ignored)
        .with_association(options.association)
        .with_jobs(options.jobs);
    tracing::debug!("Scan configuration: {:?}", config);

    let report = Scanner::new(config, JavaUnitParser::new())
        .run()
        .with_context(|| format!("Failed to scan {}", options.path.display()))?;

    for failure in &report.failures {
        eprintln!("{} Skipped {}", "⚠".yellow(), failure);
    }

    let emitter = DocumentEmitter::new(options.format);
    match &options.output {
        Some(output) => {
            emitter
                .write_to(&report.document, output)
                .with_context(|| format!("Failed to write {}", output.display()))?;
        }
        None => {
            let bytes = emitter.render(&report.document)?;
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&bytes)?;
            stdout.write_all(b"\n")?;
        }
    }

    if progress {
        let destination = options
            .output
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "stdout".to_string());
        let summary = format!(
            "{} Metadata written to {}\n  Root: {}\n  Files: {}\n  Classes: {}\n  Failures: {}",
            "✓".green(),
            destination,
            report.root.display(),
            report.files_scanned,
            report.document.len(),
            report.failures.len()
        );
        if to_stdout {
            eprintln!("{}", summary);
        } else {
            println!("{}", summary);
        }
    }

    Ok(())
}
