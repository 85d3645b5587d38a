//! .gitignore scaffolding for the target repository.

use std::path::{Path, PathBuf};

use cloudsuite_core::{FileRules, GeneratedFile};

/// The .gitignore for a Playwright/Cucumber project.
pub struct GitIgnore;

impl GeneratedFile for GitIgnore {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(".gitignore")
    }

    fn rules(&self) -> FileRules {
        FileRules::create_once()
    }

    fn render(&self) -> String {
        r#"# Dependencies
node_modules/

# Playwright
test-results/
playwright-report/

# OS
.DS_Store

# Debug
*.log
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cloudsuite_core::Overwrite;

    #[test]
    fn test_gitignore_covers_playwright_output() {
        let content = GitIgnore.render();
        assert!(content.contains("node_modules/"));
        assert!(content.contains("playwright-report/"));
    }

    #[test]
    fn test_gitignore_is_never_overwritten() {
        assert_eq!(GitIgnore.rules().overwrite, Overwrite::IfMissing);
    }
}
