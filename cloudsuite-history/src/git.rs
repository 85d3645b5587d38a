//! Git command invocation with forced timestamps.

use std::path::{Path, PathBuf};
use std::process::Command;

use chrono::NaiveDateTime;

use crate::{Error, Result, Vcs};

/// Timestamp format accepted by `GIT_AUTHOR_DATE` / `GIT_COMMITTER_DATE`.
pub const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// [`Vcs`] implementation that shells out to the `git` binary.
///
/// Every invocation runs with the repository directory as its working
/// directory and blocks until the tool exits; a non-zero status aborts
/// the caller with the captured stderr.
pub struct GitCli {
    repo_dir: PathBuf,
}

impl GitCli {
    pub fn new(repo_dir: impl Into<PathBuf>) -> Self {
        Self {
            repo_dir: repo_dir.into(),
        }
    }

    /// Initialize a repository at `dir` and return a handle to it.
    pub fn init(dir: &Path) -> Result<Self> {
        let output = Command::new("git")
            .arg("init")
            .current_dir(dir)
            .output()
            .map_err(|e| Error::Spawn {
                operation: "init",
                source: e,
            })?;

        if !output.status.success() {
            return Err(Error::Init {
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(Self::new(dir))
    }

    pub fn repo_dir(&self) -> &Path {
        &self.repo_dir
    }
}

impl Vcs for GitCli {
    fn stage(&mut self, paths: &[PathBuf]) -> Result<()> {
        let output = Command::new("git")
            .arg("add")
            .arg("--")
            .args(paths)
            .current_dir(&self.repo_dir)
            .output()
            .map_err(|e| Error::Spawn {
                operation: "add",
                source: e,
            })?;

        if !output.status.success() {
            return Err(Error::Stage {
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(())
    }

    fn commit(
        &mut self,
        message: &str,
        author_date: NaiveDateTime,
        committer_date: NaiveDateTime,
    ) -> Result<()> {
        let output = Command::new("git")
            .args(["commit", "-m"])
            .arg(message)
            .env("GIT_AUTHOR_DATE", author_date.format(DATE_FORMAT).to_string())
            .env(
                "GIT_COMMITTER_DATE",
                committer_date.format(DATE_FORMAT).to_string(),
            )
            .current_dir(&self.repo_dir)
            .output()
            .map_err(|e| Error::Spawn {
                operation: "commit",
                source: e,
            })?;

        if !output.status.success() {
            return Err(Error::Commit {
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(())
    }
}

/// Check whether a directory is inside a git work tree.
pub fn is_work_tree(dir: &Path) -> bool {
    Command::new("git")
        .args(["rev-parse", "--is-inside-work-tree"])
        .current_dir(dir)
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}
