mod completions;
mod generate;
mod init;
mod plan;
mod show;

use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use init::InitCommand;
use plan::PlanCommand;
use show::ShowCommand;

#[derive(Parser)]
#[command(name = "cloudsuite")]
#[command(version)]
#[command(about = "Generate a cloud test-automation suite with a backfilled commit history")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Init(cmd) => cmd.run(),
            Commands::Generate(cmd) => cmd.run(),
            Commands::Plan(cmd) => cmd.run(),
            Commands::Show(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Scaffold the target repository (git init, Playwright config)
    Init(InitCommand),

    /// Generate the full suite and record its commit history
    Generate(GenerateCommand),

    /// Print the commit schedule without executing it
    Plan(PlanCommand),

    /// Render a single artifact to stdout
    Show(ShowCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
