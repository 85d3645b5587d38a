use std::fmt;
use std::str::FromStr;

use crate::Error;

/// The seven kinds of files the generator emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// Playwright page object (`src/pages/<Module>Page.ts`)
    Page,
    /// Playwright test suite (`tests/<module>.test.ts`)
    Test,
    /// Gherkin feature (`features/<module>.feature`)
    Feature,
    /// Cucumber step bindings (`tests/steps/<module>.steps.ts`)
    Steps,
    /// Shared helpers (`src/utils/helpers.ts`)
    Helpers,
    /// Fixture records (`data/test-data.json`)
    Fixtures,
    /// VM maintenance test (`tests/vm_update<N>.test.ts`)
    Maintenance,
}

impl ArtifactKind {
    /// Kinds generated once per module and committed together as one batch,
    /// in write order.
    pub const PER_MODULE: [ArtifactKind; 4] = [
        ArtifactKind::Page,
        ArtifactKind::Test,
        ArtifactKind::Feature,
        ArtifactKind::Steps,
    ];

    /// Whether this kind is parameterized by a module.
    pub fn is_per_module(self) -> bool {
        matches!(
            self,
            ArtifactKind::Page | ArtifactKind::Test | ArtifactKind::Feature | ArtifactKind::Steps
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ArtifactKind::Page => "page",
            ArtifactKind::Test => "test",
            ArtifactKind::Feature => "feature",
            ArtifactKind::Steps => "steps",
            ArtifactKind::Helpers => "helpers",
            ArtifactKind::Fixtures => "fixtures",
            ArtifactKind::Maintenance => "maintenance",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArtifactKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "page" => Ok(ArtifactKind::Page),
            "test" => Ok(ArtifactKind::Test),
            "feature" => Ok(ArtifactKind::Feature),
            "steps" => Ok(ArtifactKind::Steps),
            "helpers" => Ok(ArtifactKind::Helpers),
            "fixtures" => Ok(ArtifactKind::Fixtures),
            "maintenance" => Ok(ArtifactKind::Maintenance),
            other => Err(Error::UnknownKind(other.to_string())),
        }
    }
}
