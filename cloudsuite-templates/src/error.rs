use thiserror::Error;

use crate::ArtifactKind;

/// Result type for template selection
pub type Result<T> = std::result::Result<T, Error>;

/// Errors from resolving a template.
///
/// These are usage errors; nothing has been written when one is returned,
/// and nothing catches them downstream.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error(
        "unknown artifact kind '{0}' (expected page, test, feature, steps, helpers, fixtures, or maintenance)"
    )]
    UnknownKind(String),

    #[error("unknown module '{0}'")]
    UnknownModule(String),

    #[error("artifact kind '{kind}' requires a module")]
    MissingModule { kind: ArtifactKind },

    #[error("artifact kind '{kind}' does not take a module")]
    UnexpectedModule { kind: ArtifactKind },
}
