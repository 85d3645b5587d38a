//! Shared-helpers generator.

use std::path::{Path, PathBuf};

use cloudsuite_core::{FileRules, GeneratedFile};

/// The shared login / test-data / reporting helpers.
pub struct HelpersTs;

impl GeneratedFile for HelpersTs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("src").join("utils").join("helpers.ts")
    }

    fn rules(&self) -> FileRules {
        FileRules::default()
    }

    fn render(&self) -> String {
        r##"import { Page, expect } from '@playwright/test';

/**
 * Utility functions for cloud test automation suite.
 */
export async function loginUser(page: Page, username: string, password: string) {
  await page.goto('/login');
  await page.fill('#username', username);
  await page.fill('#password', password);
  await page.click('#login-button');
  await page.waitForURL('/dashboard');
}

export async function setupTestData(page: Page, data: any) {
  await page.evaluate((testData) => {
    window.localStorage.setItem('cloudTestData', JSON.stringify(testData));
  }, data);
}

export async function clearTestData(page: Page) {
  await page.evaluate(() => {
    window.localStorage.clear();
  });
}

export async function generateCloudReport(page: Page, reportName: string) {
  await page.evaluate((name) => {
    console.log(`Generating cloud report: ${name}`);
  }, reportName);
}

export async function scaleVM(page: Page, scaleFactor: number) {
  await page.fill('#scale-factor', scaleFactor.toString());
  await page.click('#scale-vm');
  await expect(page.locator('#vm-status')).toHaveText('Scaling in progress');
}
"##
        .to_string()
    }
}
