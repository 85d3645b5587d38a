use std::path::PathBuf;

use clap::Args;
use cloudsuite_history::{GitCli, is_work_tree};
use cloudsuite_templates::Generator;
use eyre::{Result, bail};

#[derive(Args)]
pub struct GenerateCommand {
    /// Target repository (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Preview generated files without writing or committing
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let generator = Generator::with_default_catalog();

        if self.dry_run {
            return self.run_preview(&generator);
        }

        if !is_work_tree(&self.output) {
            bail!(
                "{} is not a git work tree (run 'cloudsuite init' first)",
                self.output.display()
            );
        }

        let mut vcs = GitCli::new(&self.output);
        let summary = generator.generate(&self.output, &mut vcs)?;

        println!(
            "Generated {} files across {} commits in {}",
            summary.files,
            summary.batches,
            self.output.display()
        );

        let plan = generator.plan();
        if let (Some(first), Some(last)) = (plan.first(), plan.last()) {
            println!(
                "History spans {} .. {}",
                first.date.format("%Y-%m-%d"),
                last.date.format("%Y-%m-%d")
            );
        }

        Ok(())
    }

    fn run_preview(&self, generator: &Generator) -> Result<()> {
        let artifacts = generator.preview();

        for artifact in &artifacts {
            println!("── {} ──", artifact.path.display());
            println!("{}", artifact.content);
        }

        println!("── Summary ──");
        println!("{} files would be generated", artifacts.len());

        Ok(())
    }
}
