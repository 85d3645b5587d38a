//! The fixed module catalog.
//!
//! Order is significant: a module's position here decides both the order
//! its files are written and the synthetic date of its commit.

use cloudsuite_core::Module;

/// Every section of the cloud platform that gets a suite, in commit order.
pub const MODULE_NAMES: [&str; 20] = [
    "Dashboard",
    "VirtualMachine",
    "Storage",
    "Network",
    "Database",
    "Security",
    "Monitoring",
    "Billing",
    "Support",
    "Settings",
    "UserManagement",
    "RoleManagement",
    "AuditLog",
    "Notifications",
    "API",
    "Integrations",
    "Analytics",
    "Reports",
    "Compliance",
    "Backup",
];

/// The default catalog as owned modules.
pub fn default_catalog() -> Vec<Module> {
    MODULE_NAMES.iter().copied().map(Module::new).collect()
}

/// Look up a module by its exact catalog name.
pub fn find<'a>(catalog: &'a [Module], name: &str) -> Option<&'a Module> {
    catalog.iter().find(|module| module.name() == name)
}
