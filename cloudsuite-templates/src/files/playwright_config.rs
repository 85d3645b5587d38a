//! Playwright configuration scaffolding.

use std::path::{Path, PathBuf};

use cloudsuite_core::{FileRules, GeneratedFile};

/// The target repository's `playwright.config.js`.
///
/// Written once by `init`; the generator never commits or rewrites it.
pub struct PlaywrightConfig;

impl GeneratedFile for PlaywrightConfig {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("playwright.config.js")
    }

    fn rules(&self) -> FileRules {
        FileRules::create_once()
    }

    fn render(&self) -> String {
        r##"const { defineConfig } = require('@playwright/test');

module.exports = defineConfig({
  use: {
    headless: true,
    viewport: { width: 1280, height: 720 }
  },
  projects: [
    { name: 'chromium', use: { browserName: 'chromium' } },
    { name: 'firefox', use: { browserName: 'firefox' } }
  ],
  reporter: [['html', { open: 'never' }]],
  testDir: './tests'
});
"##
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cloudsuite_core::Overwrite;

    #[test]
    fn test_config_targets_the_tests_directory() {
        let content = PlaywrightConfig.render();
        assert!(content.contains("testDir: './tests'"));
        assert!(content.contains("browserName: 'chromium'"));
    }

    #[test]
    fn test_config_is_never_overwritten() {
        assert_eq!(PlaywrightConfig.rules().overwrite, Overwrite::IfMissing);
    }
}
