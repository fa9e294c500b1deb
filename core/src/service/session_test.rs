#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::fs;
    use std::io::Cursor;

    use chrono::{NaiveDate, Timelike};
    use tempfile::tempdir;

    use crate::model::task::{Task, TaskKind};
    use crate::repository::{FileTaskStore, TaskStore};
    use crate::service::session::Session;
    use crate::ui::{TextUi, SEPARATOR};

    #[derive(Default)]
    struct MemoryStore {
        tasks: RefCell<Vec<Task>>,
        saves: Cell<usize>,
    }

    impl MemoryStore {
        fn with(tasks: Vec<Task>) -> Self {
            Self {
                tasks: RefCell::new(tasks),
                saves: Cell::new(0),
            }
        }
    }

    impl TaskStore for MemoryStore {
        fn load(&self) -> Vec<Task> {
            self.tasks.borrow().clone()
        }

        fn save(&self, tasks: &[Task]) {
            self.saves.set(self.saves.get() + 1);
            *self.tasks.borrow_mut() = tasks.to_vec();
        }
    }

    #[test]
    fn todo_deadline_then_list() {
        let mut session = Session::new(MemoryStore::default());

        session.respond("todo read book");
        session.respond("deadline return book /by 2019-12-02");
        let reply = session.respond("list");

        assert_eq!(
            reply.output,
            " Here are the tasks in your list:\n 1.[T][ ] read book\n 2.[D][ ] return book (by: Dec 2 2019)"
        );
        assert_eq!(reply.task_count, 2);
        assert!(!reply.exit);
    }

    #[test]
    fn event_shows_up_on_its_day_only() {
        let mut session = Session::new(MemoryStore::default());
        session.respond("event trip /from 2019-12-02 0900 /to 2019-12-02 1800");

        let reply = session.respond("on 2019-12-02");
        assert!(reply.output.contains("1.[E][ ] trip (from: Dec 2 2019 0900 to: Dec 2 2019 1800)"));

        let reply = session.respond("on 2019-12-03");
        assert!(reply.output.contains("No tasks found on Dec 3 2019."));
    }

    #[test]
    fn mark_then_unmark_touches_only_that_task() {
        let store = MemoryStore::with(vec![Task::todo("first"), Task::todo("second")]);
        let mut session = Session::new(store);

        session.respond("mark 2");
        assert!(!session.tasks().get(0).unwrap().is_done);
        assert!(session.tasks().get(1).unwrap().is_done);

        session.respond("unmark 2");
        assert!(!session.tasks().get(0).unwrap().is_done);
        assert!(!session.tasks().get(1).unwrap().is_done);
        assert_eq!(session.store().saves.get(), 2);
    }

    #[test]
    fn errors_are_rendered_and_nothing_is_saved() {
        let mut session = Session::new(MemoryStore::with(vec![Task::todo("only")]));

        let reply = session.respond("delete 3");
        assert_eq!(
            reply.output,
            " OOPS!!! Task number 3 does not exist. You have 1 task(s) in your list."
        );
        let reply = session.respond("event x /from 2019-12-03 /to 2019-12-02");
        assert!(reply.output.starts_with(" OOPS!!! The /from date/time must not be after /to."));
        let reply = session.respond("blah");
        assert!(reply.output.starts_with(" OOPS!!! I don't understand that command."));

        assert_eq!(session.tasks().len(), 1);
        assert_eq!(session.store().saves.get(), 0);
    }

    #[test]
    fn bye_sets_exit_and_errors_clear_it() {
        let mut session = Session::new(MemoryStore::default());
        let reply = session.respond("bye");
        assert!(reply.exit);
        assert!(session.is_exit());
        assert_eq!(reply.output, " Bye. Hope to see you again soon!");

        let reply = session.respond("nonsense");
        assert!(!reply.exit);
        assert!(!session.is_exit());
    }

    #[test]
    fn date_only_deadline_is_midnight() {
        let mut session = Session::new(MemoryStore::default());
        session.respond("deadline submit /by 5/1/2020");
        match session.tasks().get(0).map(|t| &t.kind) {
            Some(TaskKind::Deadline { by }) => {
                assert_eq!(by.date(), NaiveDate::from_ymd_opt(2020, 1, 5).unwrap());
                assert_eq!(by.hour(), 0);
                assert_eq!(by.minute(), 0);
            }
            other => panic!("expected a deadline, got {other:?}"),
        }
    }

    #[test]
    fn console_loop_stops_at_bye() {
        let mut session = Session::new(MemoryStore::default());
        let input = Cursor::new("todo a\nbye\ntodo never read\n");
        let mut ui = TextUi::new(Vec::new());

        session.run(input, &mut ui).unwrap();

        let written = String::from_utf8(ui.into_inner()).unwrap();
        assert!(written.starts_with(SEPARATOR));
        assert!(written.contains(" Now you have 1 tasks in the list.\n"));
        assert!(written.ends_with(&format!(" Bye. Hope to see you again soon!\n{SEPARATOR}\n")));
        assert_eq!(session.tasks().len(), 1);
    }

    #[test]
    fn console_loop_survives_non_utf8_input() {
        let mut session = Session::new(MemoryStore::default());
        let input = Cursor::new(&b"todo caf\xe9\r\ntodo second\nlist\n"[..]);
        let mut ui = TextUi::new(Vec::new());

        session.run(input, &mut ui).unwrap();

        assert_eq!(session.tasks().len(), 2);
        assert_eq!(session.tasks().get(0).unwrap().description, "caf\u{FFFD}");
        assert_eq!(session.tasks().get(1).unwrap().description, "second");
        let written = String::from_utf8(ui.into_inner()).unwrap();
        assert!(written.contains(" 2.[T][ ] second\n"));
    }

    #[test]
    fn console_loop_ends_quietly_at_eof() {
        let mut session = Session::new(MemoryStore::default());
        let mut ui = TextUi::new(Vec::new());
        session.run(Cursor::new("list\n"), &mut ui).unwrap();
        assert!(!session.is_exit());
    }

    #[test]
    fn state_survives_a_restart_through_the_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data").join("tasks.txt");

        {
            let mut session = Session::new(FileTaskStore::with_file(&path));
            session.respond("todo read book");
            session.respond("deadline return book /by 2019-12-02 1800");
            session.respond("event trip /from 2/12/2019 /to 4/12/2019 2359");
            session.respond("mark 1");
        }

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "T | 1 | read book\nD | 0 | return book | 2019-12-02T18:00\nE | 0 | trip | 2019-12-02T00:00 | 2019-12-04T23:59\n"
        );

        let mut session = Session::new(FileTaskStore::with_file(&path));
        assert_eq!(session.tasks().len(), 3);
        let reply = session.respond("find BOOK");
        assert_eq!(
            reply.output,
            " Here are the matching tasks in your list:\n 1.[T][X] read book\n 2.[D][ ] return book (by: Dec 2 2019 1800)"
        );
    }

    #[test]
    fn corrupt_file_lines_do_not_block_startup() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tasks.txt");
        fs::write(&path, "T | 0 | keep me\nT | 2 | x\n").unwrap();

        let session = Session::new(FileTaskStore::with_file(&path));
        assert_eq!(session.tasks().len(), 1);
        assert_eq!(session.tasks().get(0).unwrap().description, "keep me");
    }
}
