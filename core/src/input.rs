use crate::command::Command;
use crate::error::{Result, TodoError};
use crate::time::{parse_user_date, parse_user_date_time};

const FIND_USAGE: &str = "find <keyword>";
const TODO_USAGE: &str = "todo <description>";
const DEADLINE_USAGE: &str = "deadline <description> /by <date>";
pub(crate) const EVENT_USAGE: &str = "event <description> /from <start> /to <end>";
const ON_USAGE: &str = "on <date>";
const MARK_USAGE: &str = "mark <task number>";
const UNMARK_USAGE: &str = "unmark <task number>";
const DELETE_USAGE: &str = "delete <task number>";

const BY_MARKER: &str = "/by";
const FROM_MARKER: &str = "/from";
const TO_MARKER: &str = "/to";

/// Turns one input line into a command.
///
/// The first whitespace-delimited word picks the grammar; the rest of the line
/// is handed to it. Task numbers are converted to 0-based indices but not
/// range-checked, since only the live list knows its size.
pub fn parse_command(line: &str) -> Result<Command> {
    let trimmed = line.trim_ascii();
    if trimmed.is_empty() {
        return Err(TodoError::UnknownCommand);
    }

    // Only ASCII whitespace separates the verb.
    let (verb, args) = match trimmed.find(|c: char| c.is_ascii_whitespace()) {
        Some(split) => (&trimmed[..split], trimmed[split..].trim_ascii_start()),
        None => (trimmed, ""),
    };

    match verb {
        "bye" => Ok(Command::Exit),
        "list" => Ok(Command::List),
        "find" => parse_find(args),
        "todo" => parse_todo(args),
        "deadline" => parse_deadline(args),
        "event" => parse_event(args),
        "on" => parse_on(args),
        "mark" => parse_task_index(args, "Please specify which task to mark.", MARK_USAGE)
            .map(|index| Command::Mark { index }),
        "unmark" => parse_task_index(args, "Please specify which task to unmark.", UNMARK_USAGE)
            .map(|index| Command::Unmark { index }),
        "delete" => parse_task_index(args, "Please specify which task to delete.", DELETE_USAGE)
            .map(|index| Command::Delete { index }),
        _ => Err(TodoError::UnknownCommand),
    }
}

fn missing(message: &'static str, usage: &'static str) -> TodoError {
    TodoError::MissingArgument { message, usage }
}

fn parse_find(args: &str) -> Result<Command> {
    let keyword = args.trim_ascii();
    if keyword.is_empty() {
        return Err(missing("Please specify a keyword.", FIND_USAGE));
    }
    Ok(Command::Find {
        keyword: keyword.to_string(),
    })
}

fn parse_todo(args: &str) -> Result<Command> {
    let description = args.trim_ascii();
    if description.is_empty() {
        return Err(missing("The description of a todo cannot be empty.", TODO_USAGE));
    }
    Ok(Command::Todo {
        description: description.to_string(),
    })
}

fn parse_deadline(args: &str) -> Result<Command> {
    let remainder = args.trim_ascii();
    let no_description = || missing("The description of a deadline cannot be empty.", DEADLINE_USAGE);
    if remainder.is_empty() {
        return Err(no_description());
    }

    // First occurrence wins, even inside the description.
    let by_index = remainder
        .find(BY_MARKER)
        .ok_or_else(|| missing("A deadline requires a /by date.", DEADLINE_USAGE))?;

    let description = remainder[..by_index].trim_ascii();
    let by = remainder[by_index + BY_MARKER.len()..].trim_ascii();

    if description.is_empty() {
        return Err(no_description());
    }
    if by.is_empty() {
        return Err(missing("The /by date of a deadline cannot be empty.", DEADLINE_USAGE));
    }

    Ok(Command::Deadline {
        description: description.to_string(),
        by: parse_user_date_time(by)?,
    })
}

fn parse_event(args: &str) -> Result<Command> {
    let remainder = args.trim_ascii();
    let no_description = || missing("The description of an event cannot be empty.", EVENT_USAGE);
    if remainder.is_empty() {
        return Err(no_description());
    }

    let from_index = remainder
        .find(FROM_MARKER)
        .ok_or_else(|| missing("An event requires a /from time.", EVENT_USAGE))?;
    let to_index = remainder
        .find(TO_MARKER)
        .ok_or_else(|| missing("An event requires a /to time.", EVENT_USAGE))?;

    if to_index < from_index {
        return Err(TodoError::InvalidRange {
            message: "The /from marker must come before /to.",
            usage: EVENT_USAGE,
        });
    }

    let description = remainder[..from_index].trim_ascii();
    let from = remainder[from_index + FROM_MARKER.len()..to_index].trim_ascii();
    let to = remainder[to_index + TO_MARKER.len()..].trim_ascii();

    if description.is_empty() {
        return Err(no_description());
    }
    if from.is_empty() {
        return Err(missing("The /from time of an event cannot be empty.", EVENT_USAGE));
    }
    if to.is_empty() {
        return Err(missing("The /to time of an event cannot be empty.", EVENT_USAGE));
    }

    let from = parse_user_date_time(from)?;
    let to = parse_user_date_time(to)?;
    if from > to {
        return Err(TodoError::InvalidRange {
            message: "The /from date/time must not be after /to.",
            usage: EVENT_USAGE,
        });
    }

    Ok(Command::Event {
        description: description.to_string(),
        from,
        to,
    })
}

fn parse_on(args: &str) -> Result<Command> {
    let remainder = args.trim_ascii();
    if remainder.is_empty() {
        return Err(missing("Please specify a date.", ON_USAGE));
    }
    Ok(Command::On {
        date: parse_user_date(remainder)?,
    })
}

/// `n` is 1-based on screen; the command carries `n - 1`.
fn parse_task_index(args: &str, message: &'static str, usage: &'static str) -> Result<i64> {
    let text = args.trim_ascii();
    if text.is_empty() {
        return Err(missing(message, usage));
    }
    text.parse::<i32>()
        .map(|number| i64::from(number) - 1)
        .map_err(|_| TodoError::InvalidTaskNumber {
            input: text.to_string(),
            usage,
        })
}
