//! Capability interface over the external version-control tool.

use std::path::PathBuf;

use chrono::NaiveDateTime;

use crate::{CommitBatch, Error, Result};

/// The two operations the generator needs from version control.
///
/// Keeping the surface this narrow lets the scheduling and ordering logic
/// run against an in-memory double instead of a real `git` process.
pub trait Vcs {
    /// Stage the given paths, relative to the repository root.
    fn stage(&mut self, paths: &[PathBuf]) -> Result<()>;

    /// Record a commit with forced author and committer timestamps.
    fn commit(
        &mut self,
        message: &str,
        author_date: NaiveDateTime,
        committer_date: NaiveDateTime,
    ) -> Result<()>;
}

/// Stage and commit one batch.
///
/// Callers materialize every file of the batch before calling this; once
/// staging starts, a failure leaves the staged files in the index.
pub fn record(vcs: &mut dyn Vcs, batch: &CommitBatch) -> Result<()> {
    if batch.files().is_empty() {
        return Err(Error::EmptyBatch {
            message: batch.message().to_string(),
        });
    }

    vcs.stage(batch.files())?;
    vcs.commit(
        batch.message(),
        batch.author_date(),
        batch.committer_date(),
    )
}
