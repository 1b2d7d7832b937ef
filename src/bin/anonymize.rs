//! CLI binary for docx-anonymize.
//!
//! A thin shim over the library crate that maps CLI flags to an
//! `AnonymizeJob` and prints the acknowledgment.

use anyhow::{Context, Result};
use clap::Parser;
use docx_anonymize::{run_stdout, AnonymizeJob};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const AFTER_HELP: &str = r#"EXAMPLES:
  # Acknowledge an anonymization job
  anonymize --input report.docx --out-dir ./out

  # Machine-readable job receipt
  anonymize --input report.docx --out-dir ./out --json

  # Debug logging (stderr only; stdout is unaffected)
  anonymize -v --input report.docx --out-dir ./out

WORKFLOW (stages land incrementally behind this CLI):
  1. Convert  DOCX → Markdown via pandoc          (planned)
  2. Detect   find & classify named entities      (planned)
  3. Report   write report.xlsx                   (planned)
  4. Redact   rewrite Markdown, export final PDF  (planned)

Until the stages are implemented the command performs no I/O: neither
path is validated and nothing is written under --out-dir.

ENVIRONMENT VARIABLES:
  RUST_LOG            Override the stderr log filter
  ANONYMIZE_VERBOSE   Same as --verbose
  ANONYMIZE_QUIET     Same as --quiet
"#;

/// Anonymize DOCX documents: convert, detect entities, report, redact.
#[derive(Parser, Debug)]
#[command(
    name = "anonymize",
    version,
    about = "Anonymize DOCX documents: convert, detect entities, report, redact",
    long_about = "Entry point for the DOCX anonymization workflow: convert the document to \
Markdown, detect and classify named entities, write a spreadsheet report, then redact the \
Markdown and export a final PDF. The stages are landing incrementally; today the command \
acknowledges the job and performs no I/O.",
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Path to the source document (typically a .docx file).
    #[arg(long)]
    input: PathBuf,

    /// Directory the outputs will be written into.
    #[arg(long)]
    out_dir: PathBuf,

    /// Print the job receipt as JSON instead of the plain status line.
    #[arg(long, env = "ANONYMIZE_JSON")]
    json: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "ANONYMIZE_VERBOSE")]
    verbose: bool,

    /// Suppress all logs except errors.
    #[arg(short, long, env = "ANONYMIZE_QUIET")]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    // Logs go to stderr only; stdout carries nothing but the status line
    // (or the JSON receipt).
    let filter = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    let job = AnonymizeJob::new(cli.input, cli.out_dir);

    if cli.json {
        let receipt = job.receipt_json().context("Failed to serialise job receipt")?;
        println!("{receipt}");
        return Ok(());
    }

    run_stdout(&job).context("Failed to acknowledge job")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn both_options_required() {
        assert!(Cli::try_parse_from(["anonymize", "--input", "doc.docx"]).is_err());
        assert!(Cli::try_parse_from(["anonymize", "--out-dir", "out"]).is_err());
        assert!(
            Cli::try_parse_from(["anonymize", "--input", "doc.docx", "--out-dir", "out"]).is_ok()
        );
    }

    #[test]
    fn out_dir_uses_kebab_case_flag() {
        let cli = Cli::try_parse_from(["anonymize", "--input", "a", "--out-dir", "b"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("a"));
        assert_eq!(cli.out_dir, PathBuf::from("b"));
        assert!(!cli.json);
    }
}
