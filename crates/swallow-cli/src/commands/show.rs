//! Show command implementation.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;
use swallow_core::DocumentEmitter;

/// Run the show command.
pub fn run(input: PathBuf) -> Result<()> {
    if !input.exists() {
        eprintln!("{} Metadata not found: {}", "✗".red(), input.display());
        eprintln!("Run 'swallow scan' first to create it.");
        anyhow::bail!("missing metadata document");
    }

    let document = DocumentEmitter::load(&input)
        .with_context(|| format!("Failed to load {}", input.display()))?;

    print!("{}", DocumentEmitter::to_text(&document));
    Ok(())
}
