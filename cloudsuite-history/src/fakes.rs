//! In-memory test doubles for the version-control layer.
//!
//! Available to downstream crates through the `testing` feature.

use std::path::PathBuf;

use chrono::NaiveDateTime;

use crate::{Result, Vcs};

/// A commit observed by [`RecordingVcs`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCommit {
    pub message: String,
    pub author_date: NaiveDateTime,
    pub committer_date: NaiveDateTime,
}

/// [`Vcs`] double that records every stage and commit call in order.
#[derive(Debug, Default)]
pub struct RecordingVcs {
    pub staged: Vec<Vec<PathBuf>>,
    pub commits: Vec<RecordedCommit>,
}

impl Vcs for RecordingVcs {
    fn stage(&mut self, paths: &[PathBuf]) -> Result<()> {
        self.staged.push(paths.to_vec());
        Ok(())
    }

    fn commit(
        &mut self,
        message: &str,
        author_date: NaiveDateTime,
        committer_date: NaiveDateTime,
    ) -> Result<()> {
        self.commits.push(RecordedCommit {
            message: message.to_string(),
            author_date,
            committer_date,
        });
        Ok(())
    }
}
