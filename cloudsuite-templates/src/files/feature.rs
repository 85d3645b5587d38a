//! Gherkin feature generator.
//!
//! Always generic: the two modules with specialized page objects and
//! suites still describe their scenarios in the uniform shape.

use std::path::{Path, PathBuf};

use cloudsuite_core::{FileRules, GeneratedFile, Module};

/// Gherkin feature for one module.
pub struct FeatureFile {
    module: Module,
}

impl FeatureFile {
    pub fn new(module: Module) -> Self {
        Self { module }
    }
}

impl GeneratedFile for FeatureFile {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("features")
            .join(format!("{}.feature", self.module.idents().path_form))
    }

    fn rules(&self) -> FileRules {
        FileRules::default()
    }

    fn render(&self) -> String {
        let idents = self.module.idents();
        format!(
            r##"Feature: {ty} Functionality
  As a cloud administrator
  I want to interact with the {ty} module
  So that I can manage {path} resources efficiently

  Scenario: Navigate to {ty} page
    Given I am logged in as "admin"
    When I navigate to the {ty} page
    Then I should see the {ty} UI elements

  Scenario: Perform action on {ty}
    Given I am logged in as "admin"
    When I perform action on {ty} with value "test-value"
    Then I should see the state as "Action completed"

  Scenario: Perform complex action on {ty}
    Given I am logged in as "admin"
    When I perform complex action on {ty} with value "complex-test" and option "option2"
    Then I should see the state as "Complex action completed"
"##,
            ty = idents.type_form,
            path = idents.path_form,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_interpolates_both_forms() {
        let content = FeatureFile::new(Module::new("Billing")).render();

        assert!(content.starts_with("Feature: Billing Functionality"));
        assert!(content.contains("manage billing resources"));
        assert!(content.contains("Scenario: Perform complex action on Billing"));
    }

    #[test]
    fn test_feature_stays_generic_for_specialized_modules() {
        let content = FeatureFile::new(Module::new("VirtualMachine")).render();

        assert!(content.contains("Scenario: Perform action on VirtualMachine"));
        assert!(!content.contains("createVM"));
    }

    #[test]
    fn test_feature_path() {
        let file = FeatureFile::new(Module::new("Network"));
        assert_eq!(file.path(Path::new("")), Path::new("features/network.feature"));
    }
}
