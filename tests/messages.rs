#[cfg(test)]
mod tests {
    use tracksheet::libs::messages::{error, success, Message};

    #[test]
    fn test_parse_messages() {
        assert_eq!(Message::EntriesParsed(3).to_string(), "Parsed 3 time entries.");
        assert_eq!(
            Message::NoEntriesFound("work.txt".to_string()).to_string(),
            "No time entries found in work.txt."
        );
    }

    #[test]
    fn test_project_messages() {
        assert_eq!(
            Message::ProjectNotFound("Centurion".to_string()).to_string(),
            "Project 'Centurion' does not exist in the account"
        );
        assert_eq!(Message::NoTasksFound(7).to_string(), "No tasks found in project 7.");
    }

    #[test]
    fn test_submission_messages() {
        let submitted = Message::EntrySubmitted {
            project: "Centurion".to_string(),
            start: "2025-01-29 09:00:00".to_string(),
            end: "2025-01-29 12:00:00".to_string(),
        };
        assert_eq!(submitted.to_string(), "Centurion: 2025-01-29 09:00:00 - 2025-01-29 12:00:00 submitted");

        let failed = Message::EntrySubmitFailed {
            project: "Centurion".to_string(),
            start: "2025-01-29 09:00:00".to_string(),
            reason: "submission rejected: Invalid task".to_string(),
        };
        assert!(failed.to_string().contains("Invalid task"));
    }

    #[test]
    fn test_submit_summary_wording() {
        let clean = Message::SubmitSummary {
            submitted: 4,
            failed: 0,
        };
        assert_eq!(clean.to_string(), "All 4 entries submitted.");

        let partial = Message::SubmitSummary {
            submitted: 3,
            failed: 1,
        };
        assert_eq!(partial.to_string(), "3 entries submitted, 1 failed.");
    }

    #[test]
    fn test_message_prefix_helpers() {
        assert_eq!(success(Message::ConfigSaved), "✅ Configuration saved successfully");
        assert!(error(Message::ConfigParseError).starts_with("❌ "));
    }

    #[test]
    fn test_wrong_password_message() {
        assert_eq!(Message::WrongPassword(3).to_string(), "You entered the wrong password 3 times!");
    }
}
