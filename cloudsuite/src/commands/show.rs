use clap::Args;
use cloudsuite_core::GeneratedFile;
use cloudsuite_templates::{ArtifactKind, Error, catalog, resolve};
use eyre::Result;

#[derive(Args)]
pub struct ShowCommand {
    /// Artifact kind: page, test, feature, steps, helpers, fixtures, or maintenance
    pub kind: String,

    /// Module name (required for page, test, feature, and steps)
    pub module: Option<String>,
}

impl ShowCommand {
    pub fn run(&self) -> Result<()> {
        let kind: ArtifactKind = self.kind.parse()?;

        let modules = catalog::default_catalog();
        let module = match &self.module {
            Some(name) => Some(
                catalog::find(&modules, name)
                    .ok_or_else(|| Error::UnknownModule(name.clone()))?,
            ),
            None => None,
        };

        let file = resolve(kind, module)?;
        print!("{}", file.render());

        Ok(())
    }
}
