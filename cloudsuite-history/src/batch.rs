use std::path::PathBuf;

use chrono::NaiveDateTime;

/// One staged-and-committed step of the fabricated history.
///
/// Author and committer timestamps are always identical; the constructor
/// takes a single timestamp and applies it to both fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitBatch {
    files: Vec<PathBuf>,
    message: String,
    author_date: NaiveDateTime,
    committer_date: NaiveDateTime,
}

impl CommitBatch {
    pub fn new(files: Vec<PathBuf>, message: impl Into<String>, date: NaiveDateTime) -> Self {
        Self {
            files,
            message: message.into(),
            author_date: date,
            committer_date: date,
        }
    }

    /// Paths to stage, relative to the repository root, in write order.
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn author_date(&self) -> NaiveDateTime {
        self.author_date
    }

    pub fn committer_date(&self) -> NaiveDateTime {
        self.committer_date
    }
}
