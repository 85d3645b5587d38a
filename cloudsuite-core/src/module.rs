//! Module identity and name derivation.

/// A named section of the cloud platform for which suite artifacts are
/// generated.
///
/// Modules come from a fixed ordered catalog; the name is taken verbatim
/// from that catalog and never normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    name: String,
}

impl Module {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Derive the two identifier spellings used by every template.
    pub fn idents(&self) -> ModuleIdents {
        ModuleIdents::derive(&self.name)
    }
}

/// The two derived spellings of a module name.
///
/// `type_form` is the catalog name verbatim and names class-like
/// identifiers (`VirtualMachinePage`). `path_form` is the fully
/// lower-cased name and appears in routes, file names, and element
/// selector prefixes (`/virtualmachine`, `#virtualmachine-input`).
///
/// Every template derives its identifiers from this record; nothing else
/// in the workspace re-implements the case rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleIdents {
    pub type_form: String,
    pub path_form: String,
}

impl ModuleIdents {
    pub fn derive(name: &str) -> Self {
        Self {
            type_form: name.to_string(),
            path_form: name.to_lowercase(),
        }
    }
}
