use std::{path::PathBuf, process};

use anyhow::{Context as _, Result};
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use log::{debug, info};
use partial_reformat::{
    ReformatOptions, TextDocument, reformat_changed_lines, reformat_edited_lines, unified_diff,
};

/// Applies a formatter's output only to the lines edited since a reference
/// version of a file. Run the formatter yourself and pass its output.
///
/// Run it with:
/// `cargo run --example reformat-changed -- reference.py edited.py formatted.py --diff`
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The earlier version of the file, e.g. exported from version control
    reference: PathBuf,

    /// The file with your edits, rewritten unless --diff or --check is given
    edited: PathBuf,

    /// The output of the formatter for the edited file
    formatted: PathBuf,

    /// Print a unified diff instead of rewriting the edited file
    #[arg(long)]
    diff: bool,

    /// Exit with 1 if the edited file would be changed
    #[arg(long)]
    check: bool,

    /// Also reformat this many unchanged lines around each edit
    #[arg(long, short = 'U')]
    context_lines: Option<usize>,

    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let reference = TextDocument::from_file(&args.reference)
        .with_context(|| format!("Failed to load {}", args.reference.display()))?;
    let edited = TextDocument::from_file(&args.edited)
        .with_context(|| format!("Failed to load {}", args.edited.display()))?;
    let formatted = TextDocument::from_file(&args.formatted)
        .with_context(|| format!("Failed to load {}", args.formatted.display()))?;

    let result = match args.context_lines {
        None => reformat_changed_lines(&reference, &edited, &formatted),
        Some(context_lines) => reformat_edited_lines(
            &reference,
            &edited,
            &formatted,
            &ReformatOptions::with_context_lines(context_lines),
            |_, _| true,
        )
        .context("Failed to reformat the edited lines")?,
    };

    if result == edited {
        debug!("No changes for {}", args.edited.display());
        return Ok(());
    }

    let name = args.edited.display().to_string();
    if args.diff {
        print!("{}", unified_diff(&edited, &result, &name, &name, 3));
    }
    if args.check {
        info!("{name} would be reformatted");
        process::exit(1);
    }
    if !args.diff {
        result
            .write_file(&args.edited)
            .with_context(|| format!("Failed to write {name}"))?;
    }

    Ok(())
}
