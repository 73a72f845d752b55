pub mod init;
pub mod parse;
pub mod projects;
pub mod submit;
pub mod tasks;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Parse a timesheet file and display its entries")]
    Parse(parse::ParseArgs),
    #[command(about = "Parse a timesheet file and submit its entries to the tracker")]
    Submit(submit::SubmitArgs),
    #[command(about = "List all projects in the account")]
    Projects(projects::ProjectsArgs),
    #[command(about = "List the tasks of a project")]
    Tasks(tasks::TasksArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Parse(args) => parse::cmd(args),
            Commands::Submit(args) => submit::cmd(args).await,
            Commands::Projects(args) => projects::cmd(args).await,
            Commands::Tasks(args) => tasks::cmd(args).await,
        }
    }
}
