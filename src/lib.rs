//! # docx-anonymize
//!
//! Command-line entry point for a DOCX anonymization workflow.
//!
//! ## Workflow Overview
//!
//! ```text
//! DOCX
//!  │
//!  ├─ 1. Convert  DOCX → Markdown via pandoc          (planned)
//!  ├─ 2. Detect   find & classify named entities      (planned)
//!  ├─ 3. Report   write report.xlsx                   (planned)
//!  └─ 4. Redact   rewrite Markdown, export final PDF  (planned)
//! ```
//!
//! Only the entry point is implemented today. The crate accepts the two
//! paths that name an anonymization job — the source document and the
//! output directory — and acknowledges the job on stdout:
//!
//! ```text
//! Processing {input_path} → {out_dir}
//! ```
//!
//! Deliberately, nothing else happens yet: neither path is validated, no
//! file is read or written, and no external process is spawned. The four
//! stages above land one by one behind this stable CLI surface, and the
//! integration tests in `tests/cli.rs` pin the no-side-effects contract
//! until they do.
//!
//! ## Quick Start
//!
//! ```rust
//! use docx_anonymize::{run, AnonymizeJob};
//!
//! let job = AnonymizeJob::new("report.docx", "/tmp/out");
//! let mut buf = Vec::new();
//! run(&job, &mut buf)?;
//! assert_eq!(buf, "Processing report.docx → /tmp/out\n".as_bytes());
//! # Ok::<(), docx_anonymize::AnonymizeError>(())
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `anonymize` binary (clap + anyhow + tracing-subscriber) |
//!
//! Disable `cli` when using only the library to avoid pulling in CLI-only deps:
//! ```toml
//! docx-anonymize = { version = "0.1", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod error;
pub mod job;
pub mod run;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use error::AnonymizeError;
pub use job::AnonymizeJob;
pub use run::{run, run_stdout};
