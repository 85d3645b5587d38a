use thiserror::Error;

/// Result type for version-control operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors from staging or committing a batch.
///
/// All of these are fatal to the run: the caller never retries, and a
/// batch that failed mid-way leaves its staged files in the index.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to run 'git {operation}'")]
    Spawn {
        operation: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("'git add' failed: {stderr}")]
    Stage { stderr: String },

    #[error("'git commit' failed: {stderr}")]
    Commit { stderr: String },

    #[error("'git init' failed: {stderr}")]
    Init { stderr: String },

    #[error("refusing to record an empty batch: {message}")]
    EmptyBatch { message: String },
}
