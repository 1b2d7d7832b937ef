//! The anonymization job description.
//!
//! An [`AnonymizeJob`] is the pair of paths that names one run of the
//! workflow: the source document and the directory the outputs will land
//! in. Both are carried as opaque paths — existence, extension, and
//! writability are deliberately unchecked here, because the entry point
//! acknowledges the job without touching the filesystem. Validation
//! belongs to the conversion stage, which is the first consumer of either
//! path.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One anonymization job: a source document and an output directory.
///
/// Serialisable so the binary can echo it as a machine-readable receipt
/// (`--json`) and so it shows up cleanly in structured logs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnonymizeJob {
    /// Path to the source document (typically a `.docx` file).
    pub input_path: PathBuf,
    /// Directory the report, redacted Markdown, and final PDF will be
    /// written into.
    pub out_dir: PathBuf,
}

impl AnonymizeJob {
    /// Build a job from the two paths. No validation is performed.
    pub fn new(input_path: impl Into<PathBuf>, out_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            out_dir: out_dir.into(),
        }
    }

    /// The machine-readable job receipt as pretty-printed JSON.
    pub fn receipt_json(&self) -> Result<String, crate::error::AnonymizeError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The human-readable acknowledgment line for this job:
    /// `Processing {input_path} → {out_dir}`.
    ///
    /// Non-UTF-8 path bytes render lossily via [`std::path::Path::display`].
    pub fn status_line(&self) -> String {
        format!(
            "Processing {} \u{2192} {}",
            self.input_path.display(),
            self.out_dir.display()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_line_plain_paths() {
        let job = AnonymizeJob::new("doc.docx", "/tmp/out");
        assert_eq!(job.status_line(), "Processing doc.docx → /tmp/out");
    }

    #[test]
    fn status_line_keeps_spaces_verbatim() {
        let job = AnonymizeJob::new("my report.docx", "/tmp/out dir");
        assert_eq!(job.status_line(), "Processing my report.docx → /tmp/out dir");
    }

    #[test]
    fn status_line_non_ascii_paths() {
        let job = AnonymizeJob::new("бумага.docx", "/tmp/résultats");
        assert_eq!(job.status_line(), "Processing бумага.docx → /tmp/résultats");
    }

    #[test]
    fn receipt_json_field_names() {
        let job = AnonymizeJob::new("doc.docx", "out");
        let receipt = job.receipt_json().expect("job must serialise");
        let json: serde_json::Value = serde_json::from_str(&receipt).unwrap();
        assert_eq!(json["input_path"], "doc.docx");
        assert_eq!(json["out_dir"], "out");
    }
}
