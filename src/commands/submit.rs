//! Parse a timesheet file and submit its entries to the remote tracker.
//!
//! The pipeline is strictly ordered: parse the whole file first (any
//! grammar violation aborts before a single network call), authenticate,
//! fetch the project list once, then submit the entries sequentially in
//! parsed order. A failing entry is reported and the run continues, so
//! partial submission is possible and visible; there is no rollback.

use crate::api::{Session, TrackingTime};
use crate::libs::config::Config;
use crate::libs::credentials::CredentialArgs;
use crate::libs::entry::TimeEntry;
use crate::libs::messages::Message;
use crate::libs::parser;
use crate::{msg_debug, msg_error, msg_info, msg_print, msg_success};
use anyhow::{anyhow, Context, Result};
use clap::Args;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// Command-line arguments for the submit command.
#[derive(Debug, Args)]
pub struct SubmitArgs {
    /// Path to the timesheet file
    file: PathBuf,

    #[command(flatten)]
    credentials: CredentialArgs,
}

pub async fn cmd(args: SubmitArgs) -> Result<()> {
    let text = fs::read_to_string(&args.file).with_context(|| format!("Failed to read {}", args.file.display()))?;
    let entries = parser::parse(&text)?;

    if entries.is_empty() {
        msg_info!(Message::NoEntriesFound(args.file.display().to_string()));
        return Ok(());
    }

    let config = Config::read()?;
    let tracker = config.tracker.clone().unwrap_or_default();
    let mut credentials = args.credentials.resolve(&config)?;

    let mut client = TrackingTime::new(&tracker);
    let token = client.get_token(&mut credentials).await?;

    // One project listing per run; entries resolve against it by name,
    // case-insensitively.
    let projects = client.projects(&token).await?;
    let project_ids: HashMap<String, i64> = projects
        .into_iter()
        .map(|project| (project.name.to_lowercase(), project.id))
        .collect();

    msg_info!(Message::SubmittingEntries(entries.len()));

    // Task ids are cached per project so repeated task names cost one
    // lookup or creation, not one per entry.
    let mut task_cache: HashMap<i64, HashMap<String, i64>> = HashMap::new();
    let mut submitted = 0;
    let mut failed = 0;

    for entry in &entries {
        match submit_entry(&client, &token, entry, &project_ids, &mut task_cache).await {
            Ok(()) => {
                submitted += 1;
                msg_success!(Message::EntrySubmitted {
                    project: entry.project.clone(),
                    start: entry.start_timestamp(),
                    end: entry.end_timestamp(),
                });
            }
            Err(err) => {
                failed += 1;
                msg_error!(Message::EntrySubmitFailed {
                    project: entry.project.clone(),
                    start: entry.start_timestamp(),
                    reason: err.to_string(),
                });
            }
        }
    }

    msg_print!(Message::SubmitSummary { submitted, failed }, true);

    Ok(())
}

/// Submits one entry: resolves the project, resolves or creates the task,
/// then creates the time event.
async fn submit_entry(
    client: &TrackingTime,
    token: &str,
    entry: &TimeEntry,
    project_ids: &HashMap<String, i64>,
    task_cache: &mut HashMap<i64, HashMap<String, i64>>,
) -> Result<()> {
    let Some(&project_id) = project_ids.get(&entry.project.to_lowercase()) else {
        return Err(anyhow!("{}", Message::ProjectNotFound(entry.project.clone())));
    };

    if !task_cache.contains_key(&project_id) {
        let tasks = client.tasks(token, project_id).await?;
        task_cache.insert(
            project_id,
            tasks.into_iter().map(|task| (task.name.to_lowercase(), task.id)).collect(),
        );
    }
    let project_tasks = task_cache.entry(project_id).or_default();

    let task_name = entry.task_name();
    let task_id = match project_tasks.get(&task_name.to_lowercase()) {
        Some(&task_id) => task_id,
        None => {
            let task_id = client.create_task(token, task_name, project_id).await?;
            project_tasks.insert(task_name.to_lowercase(), task_id);
            msg_debug!(format!("{}", Message::RemoteTaskCreated(task_name.to_string())));
            task_id
        }
    };

    client.create_event(token, entry, task_id).await
}
