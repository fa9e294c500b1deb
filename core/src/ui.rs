//! Message templates and the sinks they are written to.

use std::io::{self, Stdout, Write};

use tracing::warn;

use crate::model::task::Task;
use crate::model::task_list::TaskList;

pub const SEPARATOR: &str = "____________________________________________________________";
pub const BOT_NAME: &str = "Todobot";

/// An output sink. Implementors only decide where a line goes; the wording of
/// every message is fixed here.
pub trait Ui {
    fn write_line(&mut self, line: &str);

    fn show_separator(&mut self) {
        self.write_line(SEPARATOR);
    }

    fn show_welcome(&mut self) {
        self.show_separator();
        self.write_line(&format!(" Hello! I'm {BOT_NAME}"));
        self.write_line(" What can I do for you?");
        self.show_separator();
    }

    fn show_bye(&mut self) {
        self.write_line(" Bye. Hope to see you again soon!");
    }

    fn show_error(&mut self, message: &str) {
        self.write_line(&format!(" OOPS!!! {message}"));
    }

    fn show_task_added(&mut self, task: &Task, task_count: usize) {
        self.write_line(" Got it. I've added this task:");
        self.write_line(&format!("   {task}"));
        self.write_line(&format!(" Now you have {task_count} tasks in the list."));
    }

    fn show_task_deleted(&mut self, task: &Task, task_count: usize) {
        self.write_line(" Noted. I've removed this task:");
        self.write_line(&format!("   {task}"));
        self.write_line(&format!(" Now you have {task_count} tasks in the list."));
    }

    fn show_task_marked(&mut self, task: &Task) {
        self.write_line(" Nice! I've marked this task as done:");
        self.write_line(&format!("   {task}"));
    }

    fn show_task_unmarked(&mut self, task: &Task) {
        self.write_line(" OK, I've marked this task as not done yet:");
        self.write_line(&format!("   {task}"));
    }

    fn show_task_list(&mut self, tasks: &TaskList) {
        self.write_line(" Here are the tasks in your list:");
        for (index, task) in tasks.iter().enumerate() {
            self.show_task_with_index(index + 1, task);
        }
    }

    fn show_matching_tasks_header(&mut self) {
        self.write_line(" Here are the matching tasks in your list:");
    }

    fn show_no_matching_tasks_found(&mut self) {
        self.write_line(" No matching tasks found.");
    }

    fn show_tasks_on_date_header(&mut self, formatted_date: &str) {
        self.write_line(&format!(" Here are the tasks on {formatted_date}:"));
    }

    fn show_no_tasks_found_on(&mut self, formatted_date: &str) {
        self.write_line(&format!(" No tasks found on {formatted_date}."));
    }

    fn show_task_with_index(&mut self, display_index: usize, task: &Task) {
        self.write_line(&format!(" {display_index}.{task}"));
    }
}

/// Writes each line straight through, for the console loop.
pub struct TextUi<W: Write> {
    out: W,
}

impl TextUi<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TextUi<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Ui for TextUi<W> {
    fn write_line(&mut self, line: &str) {
        if let Err(err) = writeln!(self.out, "{line}").and_then(|()| self.out.flush()) {
            warn!(error = %err, "failed to write output");
        }
    }
}

/// Collects one response as a single string, for request/response front ends.
#[derive(Debug, Default)]
pub struct BufferUi {
    out: String,
}

impl BufferUi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns everything written so far and clears the buffer.
    pub fn take_output(&mut self) -> String {
        std::mem::take(&mut self.out)
    }
}

impl Ui for BufferUi {
    fn write_line(&mut self, line: &str) {
        if !self.out.is_empty() {
            self.out.push('\n');
        }
        self.out.push_str(line);
    }
}
