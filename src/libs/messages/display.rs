//! Display implementation for tracksheet application messages.
//!
//! Converts structured `Message` variants into the human-readable text shown
//! on the terminal. All user-facing wording lives here, in one place, so the
//! rest of the code deals only in typed messages.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed.".to_string(),
            Message::ConfigFileNotFound => "Configuration file not found. Run 'tracksheet init' first.".to_string(),
            Message::ConfigParseError => "Failed to parse configuration".to_string(),
            Message::ConfigSaveError => "Failed to save configuration".to_string(),
            Message::ConfigModuleTracker => "Time tracker settings".to_string(),
            Message::PromptSelectModules => "Select the modules to configure (space to select, enter to confirm)".to_string(),
            Message::PromptTrackerUsername => "Enter your tracker username (email)".to_string(),
            Message::PromptTrackerUserId => "Enter your numeric tracker user id".to_string(),
            Message::PromptTrackerAccountId => "Enter your account id (leave empty if not required)".to_string(),
            Message::PromptTrackerApiUrl => "Enter the tracker API URL".to_string(),

            // === CREDENTIAL MESSAGES ===
            Message::PromptPassword => "Enter your tracker password".to_string(),
            Message::MissingUsername => "No username given. Pass --username, set TRACKSHEET_USERNAME or run 'tracksheet init'.".to_string(),
            Message::WrongPassword(count) => format!("You entered the wrong password {} times!", count),

            // === PARSE MESSAGES ===
            Message::EntriesHeader(file) => format!("Entries in {}", file),
            Message::EntriesParsed(count) => format!("Parsed {} time entries.", count),
            Message::NoEntriesFound(file) => format!("No time entries found in {}.", file),

            // === PROJECT / TASK MESSAGES ===
            Message::ProjectsHeader => "Projects:".to_string(),
            Message::NoProjectsFound => "No projects found in the account.".to_string(),
            Message::TasksHeader(project_id) => format!("Tasks in project {}:", project_id),
            Message::NoTasksFound(project_id) => format!("No tasks found in project {}.", project_id),
            Message::ProjectNotFound(name) => format!("Project '{}' does not exist in the account", name),
            Message::RemoteTaskCreated(name) => format!("Created remote task '{}'", name),

            // === SUBMISSION MESSAGES ===
            Message::SubmittingEntries(count) => format!("Submitting {} entries...", count),
            Message::EntrySubmitted { project, start, end } => {
                format!("{}: {} - {} submitted", project, start, end)
            }
            Message::EntrySubmitFailed { project, start, reason } => {
                format!("{}: {} failed: {}", project, start, reason)
            }
            Message::SubmitSummary { submitted, failed } => match failed {
                0 => format!("All {} entries submitted.", submitted),
                _ => format!("{} entries submitted, {} failed.", submitted, failed),
            },
        };
        write!(f, "{}", text)
    }
}
