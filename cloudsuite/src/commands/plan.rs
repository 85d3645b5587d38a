use clap::Args;
use cloudsuite_templates::Generator;
use eyre::Result;

#[derive(Args)]
pub struct PlanCommand {}

impl PlanCommand {
    pub fn run(&self) -> Result<()> {
        let plan = Generator::with_default_catalog().plan();

        println!("Commits ({}):", plan.len());
        for batch in &plan {
            println!(
                "  {}  {} file{}  {}",
                batch.date.format("%Y-%m-%dT%H:%M:%S"),
                batch.artifacts.len(),
                if batch.artifacts.len() == 1 { " " } else { "s" },
                batch.message
            );
        }

        Ok(())
    }
}
