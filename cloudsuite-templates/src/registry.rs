//! Selection of template generators by artifact kind.

use cloudsuite_core::{GeneratedFile, Module};

use crate::files::{FeatureFile, FixturesJson, HelpersTs, MaintenanceTs, PageTs, StepsTs, TestTs};
use crate::{ArtifactKind, Error, Result};

/// Resolve the generator for a `(kind, module)` pair.
///
/// Per-module kinds require a module and the remaining kinds reject one.
/// The maintenance kind resolves to the first maintenance test.
pub fn resolve(kind: ArtifactKind, module: Option<&Module>) -> Result<Box<dyn GeneratedFile>> {
    match (kind, module) {
        (ArtifactKind::Page, Some(m)) => Ok(Box::new(PageTs::new(m.clone()))),
        (ArtifactKind::Test, Some(m)) => Ok(Box::new(TestTs::new(m.clone()))),
        (ArtifactKind::Feature, Some(m)) => Ok(Box::new(FeatureFile::new(m.clone()))),
        (ArtifactKind::Steps, Some(m)) => Ok(Box::new(StepsTs::new(m.clone()))),
        (ArtifactKind::Helpers, None) => Ok(Box::new(HelpersTs)),
        (ArtifactKind::Fixtures, None) => Ok(Box::new(FixturesJson)),
        (ArtifactKind::Maintenance, None) => Ok(Box::new(MaintenanceTs::new(0))),
        (kind, None) => Err(Error::MissingModule { kind }),
        (kind, Some(_)) => Err(Error::UnexpectedModule { kind }),
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn test_resolve_per_module_kind() {
        let module = Module::new("Storage");
        let file = resolve(ArtifactKind::Page, Some(&module)).unwrap();
        assert_eq!(
            file.path(Path::new("")),
            Path::new("src/pages/StoragePage.ts")
        );
    }

    #[test]
    fn test_resolve_module_less_kind() {
        let file = resolve(ArtifactKind::Fixtures, None).unwrap();
        assert_eq!(file.path(Path::new("")), Path::new("data/test-data.json"));
    }

    #[test]
    fn test_per_module_kind_requires_module() {
        let err = resolve(ArtifactKind::Test, None).err().unwrap();
        assert_eq!(
            err,
            Error::MissingModule {
                kind: ArtifactKind::Test
            }
        );
    }

    #[test]
    fn test_module_less_kind_rejects_module() {
        let module = Module::new("Storage");
        let err = resolve(ArtifactKind::Helpers, Some(&module)).err().unwrap();
        assert_eq!(
            err,
            Error::UnexpectedModule {
                kind: ArtifactKind::Helpers
            }
        );
    }
}
