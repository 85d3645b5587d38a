use std::path::PathBuf;

use clap::Args;
use cloudsuite_core::{GeneratedFile, WriteResult};
use cloudsuite_history::{GitCli, is_work_tree};
use cloudsuite_templates::files::{GitIgnore, PlaywrightConfig};
use eyre::{Result, WrapErr};

#[derive(Args)]
pub struct InitCommand {
    /// Target directory (defaults to current directory)
    #[arg(default_value = ".")]
    pub output: PathBuf,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        std::fs::create_dir_all(&self.output)
            .wrap_err_with(|| format!("failed to create {}", self.output.display()))?;

        if !is_work_tree(&self.output) {
            GitCli::init(&self.output)?;
            println!("Initialized git repository in {}", self.output.display());
        }

        report(
            "playwright.config.js",
            PlaywrightConfig.write(&self.output)?,
        );
        report(".gitignore", GitIgnore.write(&self.output)?);

        println!();
        println!("Next: cloudsuite generate --output {}", self.output.display());

        Ok(())
    }
}

fn report(name: &str, result: WriteResult) {
    match result {
        WriteResult::Written => println!("  + {}", name),
        WriteResult::Skipped => println!("    {} (exists, kept)", name),
    }
}
