//! Command-line interface for the extractor.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::validate_output_dir;
use crate::dates::normalize_dates_with_report;
use crate::error::Result;
use crate::normalize::normalize;
use crate::pipeline::{read_text, structure_file};
use crate::types::LegalDocument;
use crate::yaml::{generate_json, generate_yaml, save_json, save_yaml};

/// Brazilian legislation extractor - rebuild the structure of a law from its text.
#[derive(Parser)]
#[command(name = "legisbr-extractor")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Output file format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Structure plain-text laws and write one file per law.
    Structure {
        /// Plain-text files, one law each
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Output directory (default: legislacao/)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Yaml)]
        format: OutputFormat,

        /// Print documents to stdout instead of writing files
        #[arg(long)]
        stdout: bool,
    },

    /// Print the normalized lines of a plain-text law.
    Normalize {
        /// Plain-text file
        input: PathBuf,
    },

    /// Print the text with normalized dates and report dates left unchanged.
    Dates {
        /// Plain-text file
        input: PathBuf,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Structure {
            inputs,
            output,
            format,
            stdout,
        } => structure_command(&inputs, output.as_deref(), format, stdout),
        Commands::Normalize { input } => normalize_command(&input),
        Commands::Dates { input } => dates_command(&input),
    }
}

/// Render or save one document in the requested format.
fn emit(
    doc: &LegalDocument,
    output: Option<&Path>,
    format: OutputFormat,
    stdout: bool,
) -> Result<Option<PathBuf>> {
    if stdout {
        let content = match format {
            OutputFormat::Yaml => generate_yaml(doc)?,
            OutputFormat::Json => generate_json(doc)?,
        };
        print!("{content}");
        return Ok(None);
    }

    let path = match format {
        OutputFormat::Yaml => save_yaml(doc, output)?,
        OutputFormat::Json => save_json(doc, output)?,
    };
    Ok(Some(path))
}

/// Execute the structure command.
fn structure_command(
    inputs: &[PathBuf],
    output: Option<&Path>,
    format: OutputFormat,
    stdout: bool,
) -> Result<()> {
    if let Some(output_dir) = output {
        validate_output_dir(output_dir)?;
    }

    let pb = if stdout {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(inputs.len() as u64)
    };
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{bar:30.green} {pos}/{len} {msg}")
            .expect("valid template"),
    );

    for input in inputs {
        pb.set_message(input.display().to_string());

        let result = structure_file(input)
            .and_then(|doc| emit(&doc, output, format, stdout).map(|path| (doc, path)));
        let (doc, path) = match result {
            Ok(done) => done,
            Err(e) => {
                pb.finish_and_clear();
                return Err(e);
            }
        };

        if let Some(path) = path {
            let name = doc.metadata.nickname.as_deref().unwrap_or("(sem cabeçalho)");
            pb.suspend(|| {
                println!(
                    "{} {} -> {}",
                    style("Structured").bold(),
                    style(name).cyan(),
                    path.display()
                );
                println!(
                    "  Fragments: {}  Citations: {}",
                    doc.fragments.len(),
                    doc.citation_count()
                );
                if !doc.issues.is_empty() {
                    println!("  Issues: {}", style(doc.issues.len()).yellow().bold());
                }
            });
        }

        pb.inc(1);
    }

    pb.finish_and_clear();
    Ok(())
}

/// Execute the normalize command.
fn normalize_command(input: &Path) -> Result<()> {
    let text = read_text(input)?;
    for line in normalize(&text) {
        println!("{line}");
    }
    Ok(())
}

/// Execute the dates command.
fn dates_command(input: &Path) -> Result<()> {
    let text = read_text(input)?;
    let report = normalize_dates_with_report(&text);
    print!("{}", report.text);
    if !report.text.ends_with('\n') {
        println!();
    }

    for issue in &report.issues {
        eprintln!("{} {issue}", style("Unchanged:").yellow().bold());
    }
    Ok(())
}
