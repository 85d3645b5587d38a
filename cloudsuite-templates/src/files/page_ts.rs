//! Page-object generators.
//!
//! Dashboard and VirtualMachine carry hand-authored page objects encoding
//! their module-specific flows; every other module gets the generic page
//! object parameterized by its derived identifiers. The specialization
//! stops here and in the test suites; features and step bindings are
//! always generic.

use std::path::{Path, PathBuf};

use cloudsuite_core::{FileRules, GeneratedFile, Module, ModuleIdents};

/// Playwright page object for one module.
pub struct PageTs {
    module: Module,
}

impl PageTs {
    pub fn new(module: Module) -> Self {
        Self { module }
    }

    fn render_dashboard() -> String {
        r##"import { Page, expect } from '@playwright/test';
import { loginUser } from '../utils/helpers';

/**
 * Page object for the cloud dashboard, handling metrics, alerts, and navigation.
 */
export class DashboardPage {
  readonly page: Page;
  readonly locators = {
    overview: '#dashboard-overview',
    metrics: '#dashboard-metrics',
    alerts: '#dashboard-alerts',
    navToVM: '#nav-virtualmachine',
    navToStorage: '#nav-storage'
  };

  constructor(page: Page) {
    this.page = page;
  }

  async gotoDashboard() {
    await loginUser(this.page, 'admin', 'pass');
    await this.page.goto('/dashboard');
    await expect(this.page).toHaveURL(/dashboard/);
  }

  async verifyMetrics() {
    await expect(this.page.locator(this.locators.metrics)).toBeVisible();
    await expect(this.page.locator(this.locators.metrics)).toContainText('CPU Usage');
    await expect(this.page.locator(this.locators.metrics)).toContainText('Memory Usage');
  }

  async checkAlerts(expectedCount = 0) {
    const alerts = this.page.locator(this.locators.alerts);
    await expect(alerts).toHaveCount(expectedCount);
  }

  async navigateToVirtualMachine() {
    await this.page.click(this.locators.navToVM);
    await expect(this.page).toHaveURL(/virtualmachine/);
  }

  async navigateToStorage() {
    await this.page.click(this.locators.navToStorage);
    await expect(this.page).toHaveURL(/storage/);
  }

  async verifyOverview() {
    await expect(this.page.locator(this.locators.overview)).toContainText('Cloud Overview');
  }
}
"##
        .to_string()
    }

    fn render_virtual_machine() -> String {
        r##"import { Page, expect } from '@playwright/test';
import { setupTestData } from '../utils/helpers';

/**
 * Page object for managing virtual machines in the cloud platform.
 */
export class VirtualMachinePage {
  readonly page: Page;
  readonly locators = {
    vmList: '#vm-list',
    createButton: '#create-vm',
    vmNameInput: '#vm-name',
    vmTypeSelect: '#vm-type',
    submitButton: '#submit-vm',
    status: '#vm-status',
    deleteButton: '#delete-vm',
    confirmDelete: '#confirm-delete'
  };

  constructor(page: Page) {
    this.page = page;
  }

  async gotoVirtualMachine() {
    await setupTestData(this.page, { module: 'virtual-machine' });
    await this.page.goto('/virtual-machine');
    await expect(this.page).toHaveURL(/virtual-machine/);
  }

  async createVM(config = { name: 'test-vm', type: 'standard' }) {
    await this.page.click(this.locators.createButton);
    await this.page.fill(this.locators.vmNameInput, config.name);
    await this.page.selectOption(this.locators.vmTypeSelect, config.type);
    await this.page.click(this.locators.submitButton);
    await expect(this.page.locator(this.locators.status)).toHaveText('VM created successfully');
  }

  async verifyVMList(expectedCount) {
    const vms = this.page.locator(this.locators.vmList);
    await expect(vms).toHaveCount(expectedCount);
  }

  async deleteVM(vmName) {
    await this.page.click(`text=${vmName}`);
    await this.page.click(this.locators.deleteButton);
    await this.page.click(this.locators.confirmDelete);
    await expect(this.page.locator(this.locators.status)).toHaveText('VM deleted');
  }

  async verifyVMStatus(vmName, expectedStatus) {
    await this.page.click(`text=${vmName}`);
    await expect(this.page.locator(this.locators.status)).toHaveText(expectedStatus);
  }
}
"##
        .to_string()
    }

    fn render_generic(idents: &ModuleIdents) -> String {
        format!(
            r##"import {{ Page, expect }} from '@playwright/test';
import {{ setupTestData }} from '../utils/helpers';

/**
 * Page object for the {ty} module in the cloud platform.
 */
export class {ty}Page {{
  readonly page: Page;
  readonly locators = {{
    mainInput: '#{path}-input',
    actionButton: '#{path}-action',
    status: '#{path}-status',
    header: '#{path}-header'
  }};

  constructor(page: Page) {{
    this.page = page;
  }}

  async goto{ty}() {{
    await setupTestData(this.page, {{ module: '{path}' }});
    await this.page.goto('/{path}');
    await expect(this.page).toHaveURL(/{path}/);
  }}

  async performAction(data = {{}}) {{
    await this.page.fill(this.locators.mainInput, data.value || 'test-{path}');
    await this.page.click(this.locators.actionButton);
    await expect(this.page.locator(this.locators.status)).toHaveText('Action completed');
  }}

  async verifyUIElements() {{
    await expect(this.page.locator(this.locators.header)).toBeVisible();
    await expect(this.page.locator(this.locators.mainInput)).toBeEnabled();
  }}

  async performComplexAction(data = {{}}) {{
    await this.performAction(data);
    await this.page.selectOption('#{path}-select', data.option || 'option1');
    await expect(this.page.locator(this.locators.status)).toHaveText('Complex action completed');
  }}

  async verifyState(expectedState) {{
    await expect(this.page.locator(this.locators.status)).toHaveText(expectedState);
  }}
}}
"##,
            ty = idents.type_form,
            path = idents.path_form,
        )
    }
}

impl GeneratedFile for PageTs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("src")
            .join("pages")
            .join(format!("{}Page.ts", self.module.idents().type_form))
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
    fn test_dashboard_page_is_specialized() {
        let page = PageTs::new(Module::new("Dashboard"));
        let content = page.render();

        assert!(content.contains("export class DashboardPage"));
        assert!(content.contains("verifyMetrics"));
        assert!(content.contains("checkAlerts"));
        assert!(content.contains("navigateToVirtualMachine"));
        assert!(!content.contains("performAction"));
    }

    #[test]
    fn test_virtual_machine_page_is_specialized() {
        let page = PageTs::new(Module::new("VirtualMachine"));
        let content = page.render();

        assert!(content.contains("export class VirtualMachinePage"));
        assert!(content.contains("createVM"));
        assert!(content.contains("deleteVM"));
        assert!(content.contains("verifyVMStatus"));
        assert!(content.contains("confirmDelete"));
        assert!(!content.contains("performAction"));
    }

    #[test]
    fn test_other_modules_get_generic_page() {
        let page = PageTs::new(Module::new("Storage"));
        let content = page.render();

        assert!(content.contains("export class StoragePage"));
        assert!(content.contains("'#storage-input'"));
        assert!(content.contains("await this.page.goto('/storage');"));
        assert!(content.contains("performAction"));
        assert!(content.contains("performComplexAction"));
        assert!(content.contains("verifyUIElements"));
        assert!(content.contains("verifyState"));
    }

    #[test]
    fn test_page_path_uses_type_form() {
        let page = PageTs::new(Module::new("UserManagement"));
        let path = page.path(Path::new("out"));
        assert_eq!(path, Path::new("out/src/pages/UserManagementPage.ts"));
    }
}
