use std::path::PathBuf;

use crate::ArtifactKind;

/// One rendered file, not yet written.
///
/// Artifacts are produced by the batch plan, written exactly once, and
/// never mutated.
#[derive(Debug, Clone)]
pub struct Artifact {
    pub kind: ArtifactKind,
    /// The owning module for per-module kinds, `None` otherwise.
    pub module: Option<String>,
    /// Path relative to the target repository root.
    pub path: PathBuf,
    pub content: String,
}
