//! The entry-point operation: acknowledge an anonymization job.
//!
//! [`run`] writes the job's status line to any writer; [`run_stdout`] is
//! the convenience wrapper the binary uses. Neither touches the
//! filesystem — the tests in `tests/cli.rs` hold that line until the
//! workflow stages are implemented.

use crate::error::AnonymizeError;
use crate::job::AnonymizeJob;
use std::io::Write;
use tracing::debug;

/// Acknowledge `job` by writing its status line (plus a trailing newline)
/// to `out`.
///
/// Returns [`AnonymizeError::StatusWrite`] only if the writer itself
/// fails. The job's paths are never opened, created, or checked.
pub fn run<W: Write>(job: &AnonymizeJob, out: &mut W) -> Result<(), AnonymizeError> {
    debug!(?job, "received anonymization job");
    writeln!(out, "{}", job.status_line())?;
    Ok(())
}

/// [`run`] against stdout, with the stream flushed before returning so the
/// acknowledgment is visible even when stdout is a pipe.
pub fn run_stdout(job: &AnonymizeJob) -> Result<(), AnonymizeError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    run(job, &mut handle)?;
    handle.flush()?;
    Ok(())
}
