//! One task per line, fields joined by ` | `:
//!
//! ```text
//! T | 0 | read book
//! D | 1 | return book | 2019-12-02T00:00
//! E | 0 | trip | 2019-12-02T09:00 | 2019-12-02T18:00
//! ```

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::model::task::{Task, TaskKind};
use crate::time::{format_for_storage, parse_storage_date_time};

pub const DELIMITER: &str = " | ";

static FIELD_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s\|\s").expect("field separator pattern is valid"));

/// Why a stored line was skipped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CorruptLine {
    #[error("expected at least 3 fields, found {0}")]
    TooFewFields(usize),

    #[error("done flag must be 0 or 1, found '{0}'")]
    InvalidDoneFlag(String),

    #[error("unknown task type '{0}'")]
    UnknownType(String),

    #[error("type {tag} needs {expected} fields, found {found}")]
    WrongFieldCount {
        tag: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("description is blank")]
    BlankDescription,

    #[error("{0}")]
    InvalidDateTime(String),

    #[error("event starts after it ends")]
    InvalidRange,
}

pub fn encode_line(task: &Task) -> String {
    let done = if task.is_done { "1" } else { "0" };
    let mut fields = vec![task.type_tag().to_string(), done.to_string(), task.description.clone()];
    match task.kind {
        TaskKind::Todo => {}
        TaskKind::Deadline { by } => fields.push(format_for_storage(by)),
        TaskKind::Event { from, to } => {
            fields.push(format_for_storage(from));
            fields.push(format_for_storage(to));
        }
    }
    fields.join(DELIMITER)
}

/// Decodes one trimmed, non-blank line.
pub fn decode_line(line: &str) -> Result<Task, CorruptLine> {
    let fields: Vec<&str> = FIELD_SEPARATOR.split(line).collect();
    if fields.len() < 3 {
        return Err(CorruptLine::TooFewFields(fields.len()));
    }

    let is_done = match fields[1].trim() {
        "1" => true,
        "0" => false,
        other => return Err(CorruptLine::InvalidDoneFlag(other.to_string())),
    };

    let tag = fields[0].trim();
    let (tag, expected): (&'static str, usize) = match tag {
        "T" => ("T", 3),
        "D" => ("D", 4),
        "E" => ("E", 5),
        other => return Err(CorruptLine::UnknownType(other.to_string())),
    };
    if fields.len() != expected {
        return Err(CorruptLine::WrongFieldCount {
            tag,
            expected,
            found: fields.len(),
        });
    }

    let stored = |raw: &str| {
        parse_storage_date_time(raw).map_err(|err| CorruptLine::InvalidDateTime(err.to_string()))
    };
    let kind = match tag {
        "D" => TaskKind::Deadline {
            by: stored(fields[3])?,
        },
        "E" => {
            let from = stored(fields[3])?;
            let to = stored(fields[4])?;
            if from > to {
                return Err(CorruptLine::InvalidRange);
            }
            TaskKind::Event { from, to }
        }
        _ => TaskKind::Todo,
    };

    let description = fields[2].trim();
    if description.is_empty() {
        return Err(CorruptLine::BlankDescription);
    }

    let mut task = Task::new(description, kind);
    if is_done {
        task.mark_as_done();
    }
    Ok(task)
}
