//! Suite assembly and batch orchestration.

use std::path::Path;

use chrono::NaiveDateTime;
use cloudsuite_core::{GeneratedFile, Module, write_file};
use cloudsuite_history::{CommitBatch, Vcs, record, schedule};
use eyre::{Result, WrapErr};

use crate::files::{FeatureFile, FixturesJson, HelpersTs, MaintenanceTs, PageTs, StepsTs, TestTs};
use crate::{Artifact, ArtifactKind, catalog};

/// One planned write-and-commit step.
#[derive(Debug, Clone)]
pub struct Batch {
    /// Files of this batch in write order.
    pub artifacts: Vec<Artifact>,
    pub message: String,
    pub date: NaiveDateTime,
}

/// Summary of a completed run.
#[derive(Debug, Default)]
pub struct GenerateSummary {
    pub batches: usize,
    pub files: usize,
}

/// Assembles the suite and drives the write → stage → commit sequence.
///
/// The plan is pure data; nothing touches the file system or git until
/// [`Generator::generate`] executes it.
pub struct Generator {
    catalog: Vec<Module>,
}

impl Generator {
    pub fn new(catalog: Vec<Module>) -> Self {
        Self { catalog }
    }

    pub fn with_default_catalog() -> Self {
        Self::new(catalog::default_catalog())
    }

    pub fn catalog(&self) -> &[Module] {
        &self.catalog
    }

    /// The full ordered batch plan: helpers, fixtures, one batch per
    /// module in catalog order, then the two maintenance batches.
    pub fn plan(&self) -> Vec<Batch> {
        let mut batches = Vec::with_capacity(self.catalog.len() + 4);

        batches.push(Batch {
            artifacts: vec![rendered(ArtifactKind::Helpers, None, &HelpersTs)],
            message: "Add utility helpers for login and test data".to_string(),
            date: schedule::helpers_date(),
        });

        batches.push(Batch {
            artifacts: vec![rendered(ArtifactKind::Fixtures, None, &FixturesJson)],
            message: "Add test data for cloud resources".to_string(),
            date: schedule::fixtures_date(),
        });

        for (index, module) in self.catalog.iter().enumerate() {
            batches.push(Batch {
                artifacts: module_artifacts(module),
                message: format!(
                    "Add {} page, tests, and Cucumber features",
                    module.idents().type_form
                ),
                date: schedule::module_date(index),
            });
        }

        for (index, date) in schedule::maintenance_dates().into_iter().enumerate() {
            batches.push(Batch {
                artifacts: vec![rendered(
                    ArtifactKind::Maintenance,
                    None,
                    &MaintenanceTs::new(index),
                )],
                message: format!("Add VM maintenance test {}", date.format("%Y-%m-%d")),
                date,
            });
        }

        batches
    }

    /// Every artifact the plan produces, in write order.
    pub fn preview(&self) -> Vec<Artifact> {
        self.plan()
            .into_iter()
            .flat_map(|batch| batch.artifacts)
            .collect()
    }

    /// Execute the plan against a repository rooted at `output_dir`.
    ///
    /// Each batch is all-or-nothing with respect to writes: every file is
    /// materialized before the batch touches the index. Batches run
    /// strictly in plan order; the first failure aborts the run.
    pub fn generate(&self, output_dir: &Path, vcs: &mut dyn Vcs) -> Result<GenerateSummary> {
        let mut summary = GenerateSummary::default();

        for batch in self.plan() {
            for artifact in &batch.artifacts {
                write_file(&output_dir.join(&artifact.path), &artifact.content)
                    .wrap_err_with(|| format!("failed to write {}", artifact.path.display()))?;
            }

            let files = batch
                .artifacts
                .iter()
                .map(|artifact| artifact.path.clone())
                .collect();
            record(vcs, &CommitBatch::new(files, batch.message.clone(), batch.date))
                .wrap_err_with(|| format!("failed to commit '{}'", batch.message))?;

            summary.batches += 1;
            summary.files += batch.artifacts.len();
        }

        Ok(summary)
    }
}

fn module_artifacts(module: &Module) -> Vec<Artifact> {
    vec![
        rendered(
            ArtifactKind::Page,
            Some(module),
            &PageTs::new(module.clone()),
        ),
        rendered(
            ArtifactKind::Test,
            Some(module),
            &TestTs::new(module.clone()),
        ),
        rendered(
            ArtifactKind::Feature,
            Some(module),
            &FeatureFile::new(module.clone()),
        ),
        rendered(
            ArtifactKind::Steps,
            Some(module),
            &StepsTs::new(module.clone()),
        ),
    ]
}

fn rendered(kind: ArtifactKind, module: Option<&Module>, file: &dyn GeneratedFile) -> Artifact {
    Artifact {
        kind,
        module: module.map(|m| m.name().to_string()),
        path: file.path(Path::new("")),
        content: file.render(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_orders_batches_by_date() {
        let plan = Generator::with_default_catalog().plan();

        assert_eq!(plan.len(), 24);
        for pair in plan.windows(2) {
            assert!(
                pair[0].date < pair[1].date,
                "batch '{}' at {} does not precede '{}' at {}",
                pair[0].message,
                pair[0].date,
                pair[1].message,
                pair[1].date
            );
        }
    }

    #[test]
    fn test_each_module_batch_has_its_four_artifacts() {
        let generator = Generator::with_default_catalog();
        let plan = generator.plan();

        for (index, module) in generator.catalog().iter().enumerate() {
            let batch = &plan[index + 2];
            assert_eq!(batch.artifacts.len(), 4);
            let kinds: Vec<ArtifactKind> = batch.artifacts.iter().map(|a| a.kind).collect();
            assert_eq!(kinds, ArtifactKind::PER_MODULE);
            for artifact in &batch.artifacts {
                assert_eq!(artifact.module.as_deref(), Some(module.name()));
            }
        }
    }

    #[test]
    fn test_preview_is_deterministic() {
        let generator = Generator::with_default_catalog();

        let first = generator.preview();
        let second = generator.preview();

        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.path, b.path);
            assert_eq!(a.content, b.content);
        }
    }
}
