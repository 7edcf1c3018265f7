//! Command-line interface for the splitter.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;

use crate::config::{validate_output_dir, DEFAULT_OUTPUT_DIR};
use crate::error::Result;
use crate::input::{read_content, InputSource};
use crate::splitter::{plan, split_and_route_with};

/// Lunonex SQL Splitter - Split the combined database setup script into its parts.
#[derive(Parser)]
#[command(name = "lunonex-sql-splitter")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Split a setup document into SUPABASE-PART-{1,2,3} files.
    Split {
        /// Combined setup document (default: read stdin; `-` also means stdin)
        input: Option<PathBuf>,

        /// Output directory (default: current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show where each part would go without writing anything
        #[arg(long)]
        dry_run: bool,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Split {
            input,
            output,
            dry_run,
        } => split_command(input.as_deref(), output.as_deref(), dry_run),
    }
}

/// Execute the split command.
fn split_command(input: Option<&Path>, output: Option<&Path>, dry_run: bool) -> Result<()> {
    let output_dir = output.unwrap_or(Path::new(DEFAULT_OUTPUT_DIR));

    // Validate output directory before touching the input
    validate_output_dir(output_dir)?;

    let source = InputSource::from_arg(input);
    let content = read_content(&source)?;
    tracing::debug!(
        input = %source.display_path().display(),
        bytes = content.len(),
        "Read setup document"
    );

    if dry_run {
        for part in plan(&content) {
            println!(
                "{} Part {} -> {}",
                style("Would create").yellow().bold(),
                part.part(),
                output_dir.join(part.file_name()).display()
            );
        }
        return Ok(());
    }

    let report = split_and_route_with(&content, output_dir, |written| {
        println!("{} Part {}", style("Created").green().bold(), written.part);
    })?;

    if report.files_written() > 0 {
        println!();
        println!(
            "{} {} file(s) in {}",
            style("Saved").green().bold(),
            report.files_written(),
            output_dir.display()
        );
    }

    Ok(())
}
