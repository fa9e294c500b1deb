//! Error types surfaced to the person typing commands.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TodoError>;

/// Every failure a command line can produce. None of them are fatal; the
/// front end shows the message and waits for the next line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TodoError {
    #[error("I don't understand that command. Try: todo, deadline, event, list, find, on, mark, unmark, delete, bye")]
    UnknownCommand,

    /// A description, marker, date or task number was absent or blank.
    #[error("{message} Usage: {usage}")]
    MissingArgument {
        message: &'static str,
        usage: &'static str,
    },

    #[error("'{input}' is not a valid task number. Usage: {usage}")]
    InvalidTaskNumber { input: String, usage: &'static str },

    /// Raised at execution time, never by the parser.
    #[error("Task number {number} does not exist. You have {count} task(s) in your list.")]
    TaskNotFound { number: i64, count: usize },

    #[error("{message} Usage: {usage}")]
    InvalidRange {
        message: &'static str,
        usage: &'static str,
    },

    #[error("Date/time cannot be empty. Use yyyy-MM-dd or d/M/yyyy, optionally followed by HHmm (e.g., 2019-12-02 1800).")]
    EmptyDateTime,

    #[error("Invalid date/time: '{0}'. Use yyyy-MM-dd or d/M/yyyy, optionally followed by HHmm (e.g., 2019-12-02 1800).")]
    InvalidDateTime(String),

    #[error("Date cannot be empty. Use yyyy-MM-dd or d/M/yyyy (e.g., 2019-12-02).")]
    EmptyDate,

    #[error("Invalid date: '{0}'. Use yyyy-MM-dd or d/M/yyyy (e.g., 2019-12-02).")]
    InvalidDate(String),

    #[error("Stored date/time cannot be empty.")]
    EmptyStoredDateTime,

    #[error("Invalid stored date/time: '{0}'.")]
    InvalidStoredDateTime(String),
}
