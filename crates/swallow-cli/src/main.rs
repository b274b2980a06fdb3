//! Swallow CLI
//!
//! Command-line interface for extracting class and method metadata from a source tree.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use swallow_core::{AssociationMode, OutputFormat};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "swallow")]
#[command(author, version, about = "Extract class, method and comment metadata from source code", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress progress lines
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a directory and write the metadata document
    Scan {
        /// Root directory to scan (defaults to current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Output file
        #[arg(short, long, default_value = "code_metadata.json")]
        output: PathBuf,

        /// Write the document to stdout instead of a file
        #[arg(long, conflicts_with = "output")]
        stdout: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = FormatArg::Json)]
        format: FormatArg,

        /// How comments are attached to classes
        #[arg(short, long, value_enum, default_value_t = AssociationArg::Unit)]
        association: AssociationArg,

        /// Parser threads (0 = one per core)
        #[arg(short, long, default_value = "0")]
        jobs: usize,

        /// Source file extension to scan (repeatable)
        #[arg(short, long = "extension", default_value = "java")]
        extensions: Vec<String>,

        /// Additional directory name to skip (repeatable)
        #[arg(long = "ignore")]
        ignored: Vec<String>,
    },

    /// Print a previously written metadata document as text
    Show {
        /// Metadata document
        #[arg(default_value = "code_metadata.json")]
        input: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Json,
    Text,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Text => OutputFormat::Text,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum AssociationArg {
    /// Every class gets all comments of its file
    Unit,
    /// Each comment goes to the declaration it precedes or sits in
    Proximity,
}

impl From<AssociationArg> for AssociationMode {
    fn from(arg: AssociationArg) -> Self {
        match arg {
            AssociationArg::Unit => AssociationMode::Unit,
            AssociationArg::Proximity => AssociationMode::Proximity,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let default_filter = if cli.verbose { "swallow=debug" } else { "swallow=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Scan {
            path,
            output,
            stdout,
            format,
            association,
            jobs,
            extensions,
            ignored,
        } => {
            let options = commands::scan::ScanOptions {
                path,
                output: if stdout { None } else { Some(output) },
                format: format.into(),
                association: association.into(),
                jobs,
                extensions,
                ignored,
                quiet: cli.quiet,
            };
            commands::scan::run(options)?;
        }
        Commands::Show { input } => {
            commands::show::run(input)?;
        }
    }

    Ok(())
}
