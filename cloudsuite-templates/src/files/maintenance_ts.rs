//! VM maintenance-test generator.
//!
//! Two of these land after the module loop, each in its own commit on a
//! fixed June date. Numbering is 1-based in file names and test titles.

use std::path::{Path, PathBuf};

use cloudsuite_core::{FileRules, GeneratedFile};

/// One trailing VM maintenance test.
pub struct MaintenanceTs {
    index: usize,
}

impl MaintenanceTs {
    /// `index` is the 0-based position in the maintenance sequence.
    pub fn new(index: usize) -> Self {
        Self { index }
    }

    fn number(&self) -> usize {
        self.index + 1
    }
}

impl GeneratedFile for MaintenanceTs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("tests")
            .join(format!("vm_update{}.test.ts", self.number()))
    }

    fn rules(&self) -> FileRules {
        FileRules::default()
    }

    fn render(&self) -> String {
        format!(
            r##"import {{ test }} from '@playwright/test';
import {{ VirtualMachinePage }} from '../src/pages/VirtualMachinePage';

test('VM maintenance update {n}', async ({{ page }}) => {{
  const vmPage = new VirtualMachinePage(page);
  await vmPage.gotoVirtualMachine();
  await vmPage.createVM({{ name: 'update-vm-{n}', type: 'high-performance' }});
  await vmPage.verifyVMList(3);
}});
"##,
            n = self.number(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maintenance_numbering_is_one_based() {
        let first = MaintenanceTs::new(0);
        assert_eq!(first.path(Path::new("")), Path::new("tests/vm_update1.test.ts"));
        assert!(first.render().contains("'VM maintenance update 1'"));
        assert!(first.render().contains("update-vm-1"));

        let second = MaintenanceTs::new(1);
        assert_eq!(second.path(Path::new("")), Path::new("tests/vm_update2.test.ts"));
        assert!(second.render().contains("'VM maintenance update 2'"));
    }

    #[test]
    fn test_maintenance_reuses_the_vm_page_object() {
        let content = MaintenanceTs::new(0).render();
        assert!(content.contains("from '../src/pages/VirtualMachinePage'"));
        assert!(content.contains("type: 'high-performance'"));
    }
}
