#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigFileNotFound,
    ConfigParseError,
    ConfigSaveError,
    ConfigModuleTracker,
    PromptSelectModules,
    PromptTrackerUsername,
    PromptTrackerUserId,
    PromptTrackerAccountId,
    PromptTrackerApiUrl,

    // === CREDENTIAL MESSAGES ===
    PromptPassword,
    MissingUsername,
    WrongPassword(i32), // retry limit

    // === PARSE MESSAGES ===
    EntriesHeader(String),  // file name
    EntriesParsed(usize),   // entry count
    NoEntriesFound(String), // file name

    // === PROJECT / TASK MESSAGES ===
    ProjectsHeader,
    NoProjectsFound,
    TasksHeader(i64), // project id
    NoTasksFound(i64),
    ProjectNotFound(String),
    RemoteTaskCreated(String), // task name

    // === SUBMISSION MESSAGES ===
    SubmittingEntries(usize),
    EntrySubmitted {
        project: String,
        start: String,
        end: String,
    },
    EntrySubmitFailed {
        project: String,
        start: String,
        reason: String,
    },
    SubmitSummary {
        submitted: usize,
        failed: usize,
    },
}
