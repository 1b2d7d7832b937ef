//! Error types for the docx-anonymize library.
//!
//! The scaffold has exactly two failure modes — the acknowledgment writer
//! failing, and the JSON job receipt failing to encode. The anonymization
//! stages themselves are not implemented yet, so there are no input,
//! conversion, or pipeline variants to report; each stage brings its own
//! variants when it lands.

use thiserror::Error;

/// All errors returned by the docx-anonymize library.
#[derive(Debug, Error)]
pub enum AnonymizeError {
    /// The status line could not be written to the output stream.
    #[error("failed to write status line: {0}")]
    StatusWrite(#[from] std::io::Error),

    /// The job receipt could not be serialised to JSON.
    #[error("failed to encode job receipt: {0}")]
    ReceiptEncode(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_write_display_includes_cause() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let e = AnonymizeError::from(io);
        let msg = e.to_string();
        assert!(msg.contains("status line"), "got: {msg}");
        assert!(msg.contains("pipe closed"), "got: {msg}");
    }
}
