//! Cucumber step-binding generator.
//!
//! Always generic, like the features it binds. Step text here must match
//! the feature generator word for word; both derive from the same
//! identifier record.

use std::path::{Path, PathBuf};

use cloudsuite_core::{FileRules, GeneratedFile, Module};

/// Cucumber step bindings for one module.
pub struct StepsTs {
    module: Module,
}

impl StepsTs {
    pub fn new(module: Module) -> Self {
        Self { module }
    }
}

impl GeneratedFile for StepsTs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("tests")
            .join("steps")
            .join(format!("{}.steps.ts", self.module.idents().path_form))
    }

    fn rules(&self) -> FileRules {
        FileRules::default()
    }

    fn render(&self) -> String {
        let idents = self.module.idents();
        format!(
            r##"const {{ Given, When, Then }} = require('@cucumber/cucumber');
const {{ {ty}Page }} = require('../../src/pages/{ty}Page');
const {{ loginUser }} = require('../../src/utils/helpers');

Given('I am logged in as {{string}}', async function (username) {{
  await loginUser(this.page, username, 'pass');
}});

When('I navigate to the {ty} page', async function () {{
  const {path}Page = new {ty}Page(this.page);
  await {path}Page.goto{ty}();
}});

When('I perform action on {ty} with value {{string}}', async function (value) {{
  const {path}Page = new {ty}Page(this.page);
  await {path}Page.performAction({{ value }});
}});

When('I perform complex action on {ty} with value {{string}} and option {{string}}', async function (value, option) {{
  const {path}Page = new {ty}Page(this.page);
  await {path}Page.performComplexAction({{ value, option }});
}});

Then('I should see the state as {{string}}', async function (expectedState) {{
  const {path}Page = new {ty}Page(this.page);
  await {path}Page.verifyState(expectedState);
}});

Then('I should see the {ty} UI elements', async function () {{
  const {path}Page = new {ty}Page(this.page);
  await {path}Page.verifyUIElements();
}});
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
    fn test_steps_reference_the_page_object() {
        let content = StepsTs::new(Module::new("Reports")).render();

        assert!(content.contains("require('../../src/pages/ReportsPage')"));
        assert!(content.contains("const reportsPage = new ReportsPage(this.page);"));
        assert!(content.contains("await reportsPage.gotoReports();"));
    }

    #[test]
    fn test_steps_keep_cucumber_placeholders() {
        let content = StepsTs::new(Module::new("Reports")).render();

        assert!(content.contains("'I am logged in as {string}'"));
        assert!(content.contains("'I perform action on Reports with value {string}'"));
        assert!(
            content
                .contains("'I perform complex action on Reports with value {string} and option {string}'")
        );
    }

    #[test]
    fn test_steps_stay_generic_for_specialized_modules() {
        let content = StepsTs::new(Module::new("Dashboard")).render();

        assert!(content.contains("performAction"));
        assert!(!content.contains("verifyMetrics"));
    }

    #[test]
    fn test_steps_path() {
        let file = StepsTs::new(Module::new("UserManagement"));
        assert_eq!(
            file.path(Path::new("")),
            Path::new("tests/steps/usermanagement.steps.ts")
        );
    }
}
