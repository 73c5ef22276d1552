#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskAdded(String),          // id
    TaskToggled(String, bool),  // text, completed
    TaskEdited(String),         // text
    TaskDeleted(String),        // text
    TaskNotFound(String),       // id or prefix
    CompletedCleared(usize),
    NothingToClear,
    NoTasks(String),            // filter
    TasksHeader(String),        // filter
    CountsFooter(usize, usize), // completed, total
    InvalidFilter(String),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigFileNotFound,
    ConfigParseError(String), // path
    ConfigWizardHeader,
    PromptStorageKey,
    PromptDebounceMs,
    PromptTeardown,
    PromptDefaultFilter,

    // === SYNC MESSAGES ===
    PendingWriteFlushed,
    PendingWriteDiscarded,

    // === SHELL MESSAGES ===
    ShellWelcome(usize), // task count
    ShellHelp,
    ShellPrompt(String), // filter
    ShellUnknownCommand(String),
    ShellMissingArgument(String), // usage
    ShellFilterChanged(String),
    ShellGoodbye,
    ShellInputError(String),
}
