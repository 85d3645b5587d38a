//! Playwright test-suite generators.
//!
//! Mirrors the page-object specialization: Dashboard and VirtualMachine
//! get hand-authored suites exercising their specific operations, all
//! other modules get the generic four-test shape.

use std::path::{Path, PathBuf};

use cloudsuite_core::{FileRules, GeneratedFile, Module, ModuleIdents};

/// Playwright test suite for one module.
pub struct TestTs {
    module: Module,
}

impl TestTs {
    pub fn new(module: Module) -> Self {
        Self { module }
    }

    fn render_dashboard() -> String {
        r##"import { test, expect } from '@playwright/test';
import { DashboardPage } from '../src/pages/DashboardPage';
import { loginUser } from '../src/utils/helpers';

test.describe('Dashboard Tests', () => {
  test.beforeEach(async ({ page }) => {
    await loginUser(page, 'admin', 'pass');
  });

  test('should display metrics on dashboard', async ({ page }) => {
    const dashboardPage = new DashboardPage(page);
    await dashboardPage.gotoDashboard();
    await dashboardPage.verifyMetrics();
  });

  test('should have no alerts on dashboard', async ({ page }) => {
    const dashboardPage = new DashboardPage(page);
    await dashboardPage.gotoDashboard();
    await dashboardPage.checkAlerts(0);
  });

  test('should navigate to Virtual Machine page', async ({ page }) => {
    const dashboardPage = new DashboardPage(page);
    await dashboardPage.gotoDashboard();
    await dashboardPage.navigateToVirtualMachine();
  });

  test('should verify dashboard overview', async ({ page }) => {
    const dashboardPage = new DashboardPage(page);
    await dashboardPage.gotoDashboard();
    await dashboardPage.verifyOverview();
  });
});
"##
        .to_string()
    }

    fn render_virtual_machine() -> String {
        r##"import { test, expect } from '@playwright/test';
import { VirtualMachinePage } from '../src/pages/VirtualMachinePage';
import { setupTestData } from '../src/utils/helpers';

test.describe('VirtualMachine Tests', () => {
  test.beforeEach(async ({ page }) => {
    await setupTestData(page, { module: 'virtual-machine' });
  });

  test('should create a VM through the confirmation flow', async ({ page }) => {
    const vmPage = new VirtualMachinePage(page);
    await vmPage.gotoVirtualMachine();
    await vmPage.createVM({ name: 'test-vm', type: 'standard' });
  });

  test('should list provisioned VMs', async ({ page }) => {
    const vmPage = new VirtualMachinePage(page);
    await vmPage.gotoVirtualMachine();
    await vmPage.verifyVMList(2);
  });

  test('should delete a VM after confirming', async ({ page }) => {
    const vmPage = new VirtualMachinePage(page);
    await vmPage.gotoVirtualMachine();
    await vmPage.createVM({ name: 'doomed-vm', type: 'standard' });
    await vmPage.deleteVM('doomed-vm');
  });

  test('should report VM status', async ({ page }) => {
    const vmPage = new VirtualMachinePage(page);
    await vmPage.gotoVirtualMachine();
    await vmPage.verifyVMStatus('prod-vm-1', 'running');
  });
});
"##
        .to_string()
    }

    fn render_generic(idents: &ModuleIdents) -> String {
        format!(
            r##"import {{ test, expect }} from '@playwright/test';
import {{ {ty}Page }} from '../src/pages/{ty}Page';
import {{ loginUser }} from '../src/utils/helpers';

test.describe('{ty} Tests', () => {{
  test.beforeEach(async ({{ page }}) => {{
    await loginUser(page, 'admin', 'pass');
  }});

  test('should navigate to {ty} page', async ({{ page }}) => {{
    const {path}Page = new {ty}Page(page);
    await {path}Page.goto{ty}();
    await {path}Page.verifyUIElements();
  }});

  test('should perform action on {ty}', async ({{ page }}) => {{
    const {path}Page = new {ty}Page(page);
    await {path}Page.goto{ty}();
    await {path}Page.performAction({{ value: 'test-value' }});
    await {path}Page.verifyState('Action completed');
  }});

  test('should perform complex action on {ty}', async ({{ page }}) => {{
    const {path}Page = new {ty}Page(page);
    await {path}Page.goto{ty}();
    await {path}Page.performComplexAction({{ value: 'complex-test', option: 'option2' }});
    await {path}Page.verifyState('Complex action completed');
  }});

  test('should handle {ty} error case', async ({{ page }}) => {{
    const {path}Page = new {ty}Page(page);
    await {path}Page.goto{ty}();
    await {path}Page.performAction({{ value: '' }});
    await expect(page.locator('#error')).toHaveText('Invalid input');
  }});
}});
"##,
            ty = idents.type_form,
            path = idents.path_form,
        )
    }
}

impl GeneratedFile for TestTs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("tests")
            .join(format!("{}.test.ts", self.module.idents().path_form))
    }

    fn rules(&self) -> FileRules {
        FileRules::default()
    }

    fn render(&self) -> String {
        let idents = self.module.idents();
        match idents.type_form.as_str() {
            "Dashboard" => Self::render_dashboard(),
            "VirtualMachine" => Self::render_virtual_machine(),
            _ => Self::render_generic(&idents),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_suite_is_specialized() {
        let content = TestTs::new(Module::new("Dashboard")).render();

        assert!(content.contains("verifyMetrics"));
        assert!(content.contains("checkAlerts(0)"));
        assert!(content.contains("navigateToVirtualMachine"));
        assert!(!content.contains("performAction"));
    }

    #[test]
    fn test_virtual_machine_suite_is_specialized() {
        let content = TestTs::new(Module::new("VirtualMachine")).render();

        assert!(content.contains("createVM"));
        assert!(content.contains("deleteVM"));
        assert!(content.contains("verifyVMStatus"));
        assert!(!content.contains("performAction"));
    }

    #[test]
    fn test_other_modules_get_generic_suite() {
        let content = TestTs::new(Module::new("Network")).render();

        assert!(content.contains("test.describe('Network Tests'"));
        assert!(content.contains("const networkPage = new NetworkPage(page);"));
        assert!(content.contains("await networkPage.gotoNetwork();"));
        assert!(content.contains("should handle Network error case"));
    }

    #[test]
    fn test_suite_path_uses_path_form() {
        let file = TestTs::new(Module::new("AuditLog"));
        assert_eq!(
            file.path(Path::new("")),
            Path::new("tests/auditlog.test.ts")
        );
    }
}
