//! List all projects in the remote tracker account.

use crate::api::{Session, TrackingTime};
use crate::libs::config::Config;
use crate::libs::credentials::CredentialArgs;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;
use clap::Args;

/// Command-line arguments for the projects command.
#[derive(Debug, Args)]
pub struct ProjectsArgs {
    #[command(flatten)]
    credentials: CredentialArgs,
}

pub async fn cmd(args: ProjectsArgs) -> Result<()> {
    let config = Config::read()?;
    let tracker = config.tracker.clone().unwrap_or_default();
    let mut credentials = args.credentials.resolve(&config)?;

    let mut client = TrackingTime::new(&tracker);
    let token = client.get_token(&mut credentials).await?;

    let projects = client.projects(&token).await?;
    if projects.is_empty() {
        msg_info!(Message::NoProjectsFound);
        return Ok(());
    }

    msg_print!(Message::ProjectsHeader, true);
    View::projects(&projects)?;

    Ok(())
}
