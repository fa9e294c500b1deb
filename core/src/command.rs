use chrono::{NaiveDate, NaiveDateTime};
use tracing::debug;

use crate::error::{Result, TodoError};
use crate::input::EVENT_USAGE;
use crate::model::task::Task;
use crate::model::task_list::TaskList;
use crate::repository::TaskStore;
use crate::time::format_date_for_display;
use crate::ui::Ui;

/// One parsed input line. Indices are 0-based and unchecked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Exit,
    List,
    Find { keyword: String },
    Todo { description: String },
    Deadline { description: String, by: NaiveDateTime },
    Event { description: String, from: NaiveDateTime, to: NaiveDateTime },
    On { date: NaiveDate },
    Mark { index: i64 },
    Unmark { index: i64 },
    Delete { index: i64 },
}

impl Command {
    /// Applies the command.
    ///
    /// Mutating commands change the list once and save once; queries never
    /// save. A bad index fails before anything is touched.
    pub fn execute<U, S>(&self, tasks: &mut TaskList, ui: &mut U, store: &S) -> Result<()>
    where
        U: Ui + ?Sized,
        S: TaskStore + ?Sized,
    {
        debug!(command = ?self, "executing");
        match self {
            Command::Exit => ui.show_bye(),
            Command::List => ui.show_task_list(tasks),
            Command::Find { keyword } => find(tasks, ui, keyword),
            Command::On { date } => on(tasks, ui, *date),
            Command::Todo { description } => add(tasks, ui, store, Task::todo(description.as_str())),
            Command::Deadline { description, by } => {
                add(tasks, ui, store, Task::deadline(description.as_str(), *by))
            }
            Command::Event {
                description,
                from,
                to,
            } => {
                let task = Task::event(description.as_str(), *from, *to).ok_or(
                    TodoError::InvalidRange {
                        message: "The /from date/time must not be after /to.",
                        usage: EVENT_USAGE,
                    },
                )?;
                add(tasks, ui, store, task)
            }
            Command::Mark { index } => {
                let task = tasks.get_mut_checked(*index)?;
                task.mark_as_done();
                let task = task.clone();
                store.save(tasks.as_slice());
                ui.show_task_marked(&task);
            }
            Command::Unmark { index } => {
                let task = tasks.get_mut_checked(*index)?;
                task.mark_as_not_done();
                let task = task.clone();
                store.save(tasks.as_slice());
                ui.show_task_unmarked(&task);
            }
            Command::Delete { index } => {
                let removed = tasks.remove_checked(*index)?;
                store.save(tasks.as_slice());
                ui.show_task_deleted(&removed, tasks.len());
            }
        }
        Ok(())
    }

    /// Only `bye` ends the session.
    pub fn is_exit(&self) -> bool {
        matches!(self, Command::Exit)
    }
}

fn add<U, S>(tasks: &mut TaskList, ui: &mut U, store: &S, task: Task)
where
    U: Ui + ?Sized,
    S: TaskStore + ?Sized,
{
    tasks.add(task.clone());
    store.save(tasks.as_slice());
    ui.show_task_added(&task, tasks.len());
}

fn find<U: Ui + ?Sized>(tasks: &TaskList, ui: &mut U, keyword: &str) {
    ui.show_matching_tasks_header();

    let mut found = false;
    for (index, task) in tasks.iter().enumerate() {
        if task.description_contains(keyword) {
            ui.show_task_with_index(index + 1, task);
            found = true;
        }
    }

    if !found {
        ui.show_no_matching_tasks_found();
    }
}

fn on<U: Ui + ?Sized>(tasks: &TaskList, ui: &mut U, date: NaiveDate) {
    let formatted = format_date_for_display(date);
    ui.show_tasks_on_date_header(&formatted);

    let mut found = false;
    for (index, task) in tasks.iter().enumerate() {
        if task.occurs_on(date) {
            ui.show_task_with_index(index + 1, task);
            found = true;
        }
    }

    if !found {
        ui.show_no_tasks_found_on(&formatted);
    }
}
