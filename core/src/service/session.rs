use std::borrow::Cow;
use std::io::{self, BufRead};

use tracing::{debug, info};

use crate::error::Result;
use crate::input::parse_command;
use crate::model::task_list::TaskList;
use crate::repository::TaskStore;
use crate::service::dto::Response;
use crate::ui::{BufferUi, Ui};

/// Owns the task list for one run of the program and answers input lines
/// against it. Front ends only supply input and an output sink.
pub struct Session<S: TaskStore> {
    store: S,
    tasks: TaskList,
    should_exit: bool,
}

impl<S: TaskStore> Session<S> {
    pub fn new(store: S) -> Self {
        let tasks = TaskList::from(store.load());
        info!(count = tasks.len(), "session started");
        Self {
            store,
            tasks,
            should_exit: false,
        }
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Whether the last handled line was `bye`.
    pub fn is_exit(&self) -> bool {
        self.should_exit
    }

    pub fn welcome(&self) -> String {
        let mut ui = BufferUi::new();
        ui.show_welcome();
        ui.take_output()
    }

    /// Parses and executes one line, writing the reply (or the error) to `ui`.
    /// Returns true when the caller should stop reading input.
    pub fn handle<U: Ui + ?Sized>(&mut self, input: &str, ui: &mut U) -> bool {
        match self.dispatch(input, ui) {
            Ok(exit) => self.should_exit = exit,
            Err(err) => {
                debug!(error = %err, "command rejected");
                self.should_exit = false;
                ui.show_error(&err.to_string());
            }
        }
        self.should_exit
    }

    pub fn respond(&mut self, input: &str) -> Response {
        let mut ui = BufferUi::new();
        let exit = self.handle(input, &mut ui);
        Response {
            output: ui.take_output(),
            exit,
            task_count: self.tasks.len(),
        }
    }

    /// Console loop: welcome, then one reply per line, each followed by a
    /// separator, until `bye` or end of input.
    ///
    /// Bytes that are not UTF-8 become U+FFFD; only a failing reader ends the
    /// loop early.
    pub fn run<R: BufRead, U: Ui + ?Sized>(&mut self, mut input: R, ui: &mut U) -> io::Result<()> {
        ui.show_welcome();
        let mut raw = Vec::new();
        loop {
            raw.clear();
            if input.read_until(b'\n', &mut raw)? == 0 {
                break;
            }
            let text = String::from_utf8_lossy(&raw);
            if let Cow::Owned(_) = text {
                debug!("replaced invalid UTF-8 in input line");
            }
            let line = text.trim_end_matches(['\n', '\r']);
            let exit = self.handle(line, ui);
            ui.show_separator();
            if exit {
                break;
            }
        }
        Ok(())
    }

    fn dispatch<U: Ui + ?Sized>(&mut self, input: &str, ui: &mut U) -> Result<bool> {
        let command = parse_command(input)?;
        command.execute(&mut self.tasks, ui, &self.store)?;
        Ok(command.is_exit())
    }
}
