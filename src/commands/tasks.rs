//! List the tasks of one project in the remote tracker account.

use crate::api::{Session, TrackingTime};
use crate::libs::config::Config;
use crate::libs::credentials::CredentialArgs;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;
use clap::Args;

/// Command-line arguments for the tasks command.
#[derive(Debug, Args)]
pub struct TasksArgs {
    /// Numeric id of the project, as shown by the projects command
    #[arg(long = "project-id", required = true)]
    project_id: i64,

    #[command(flatten)]
    credentials: CredentialArgs,
}

pub async fn cmd(args: TasksArgs) -> Result<()> {
    let config = Config::read()?;
    let tracker = config.tracker.clone().unwrap_or_default();
    let mut credentials = args.credentials.resolve(&config)?;

    let mut client = TrackingTime::new(&tracker);
    let token = client.get_token(&mut credentials).await?;

    let tasks = client.tasks(&token, args.project_id).await?;
    if tasks.is_empty() {
        msg_info!(Message::NoTasksFound(args.project_id));
        return Ok(());
    }

    msg_print!(Message::TasksHeader(args.project_id), true);
    View::tasks(&tasks)?;

    Ok(())
}
