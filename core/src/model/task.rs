use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};

use crate::time::format_for_display;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskKind {
    Todo,
    Deadline {
        by: NaiveDateTime,
    },
    /// `from <= to` is checked by whoever builds one: the parser for user
    /// input, the line codec for stored data.
    Event {
        from: NaiveDateTime,
        to: NaiveDateTime,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub description: String,
    pub is_done: bool,
    pub kind: TaskKind,
}

impl Task {
    pub fn new(description: impl Into<String>, kind: TaskKind) -> Self {
        Self {
            description: description.into(),
            is_done: false,
            kind,
        }
    }

    pub fn todo(description: impl Into<String>) -> Self {
        Self::new(description, TaskKind::Todo)
    }

    pub fn deadline(description: impl Into<String>, by: NaiveDateTime) -> Self {
        Self::new(description, TaskKind::Deadline { by })
    }

    /// `None` when `from` is after `to`. Building the kind by hand through
    /// [`Task::new`] skips this check.
    pub fn event(
        description: impl Into<String>,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> Option<Self> {
        (from <= to).then(|| Self::new(description, TaskKind::Event { from, to }))
    }

    pub fn type_tag(&self) -> &'static str {
        match self.kind {
            TaskKind::Todo => "T",
            TaskKind::Deadline { .. } => "D",
            TaskKind::Event { .. } => "E",
        }
    }

    pub fn status_icon(&self) -> &'static str {
        if self.is_done {
            "X"
        } else {
            " "
        }
    }

    pub fn mark_as_done(&mut self) {
        self.is_done = true;
    }

    pub fn mark_as_not_done(&mut self) {
        self.is_done = false;
    }

    /// Deadlines fall on the calendar day of `by`; events cover every day from
    /// the start date to the end date inclusive. Todos have no date.
    pub fn occurs_on(&self, date: NaiveDate) -> bool {
        match self.kind {
            TaskKind::Todo => false,
            TaskKind::Deadline { by } => by.date() == date,
            TaskKind::Event { from, to } => from.date() <= date && date <= to.date(),
        }
    }

    pub fn description_contains(&self, keyword: &str) -> bool {
        self.description
            .to_lowercase()
            .contains(&keyword.to_lowercase())
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}][{}] {}",
            self.type_tag(),
            self.status_icon(),
            self.description
        )?;
        match self.kind {
            TaskKind::Todo => Ok(()),
            TaskKind::Deadline { by } => write!(f, " (by: {})", format_for_display(by)),
            TaskKind::Event { from, to } => write!(
                f,
                " (from: {} to: {})",
                format_for_display(from),
                format_for_display(to)
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn renders_each_variant() {
        let mut todo = Task::todo("read book");
        assert_eq!(todo.to_string(), "[T][ ] read book");
        todo.mark_as_done();
        assert_eq!(todo.to_string(), "[T][X] read book");

        let deadline = Task::deadline("return book", at(2019, 12, 2, 0, 0));
        assert_eq!(deadline.to_string(), "[D][ ] return book (by: Dec 2 2019)");

        let event = Task::event("trip", at(2019, 12, 2, 9, 0), at(2019, 12, 3, 18, 0)).unwrap();
        assert_eq!(
            event.to_string(),
            "[E][ ] trip (from: Dec 2 2019 0900 to: Dec 3 2019 1800)"
        );
    }

    #[test]
    fn event_needs_start_before_end() {
        assert!(Task::event("e", at(2019, 12, 3, 0, 0), at(2019, 12, 2, 23, 59)).is_none());

        let instant = at(2019, 12, 2, 9, 0);
        let same = Task::event("e", instant, instant).unwrap();
        assert_eq!(same.kind, TaskKind::Event { from: instant, to: instant });
    }

    #[test]
    fn marking_is_idempotent() {
        let mut task = Task::todo("x");
        task.mark_as_done();
        task.mark_as_done();
        assert!(task.is_done);
        task.mark_as_not_done();
        task.mark_as_not_done();
        assert!(!task.is_done);
    }

    #[test]
    fn occurs_on_uses_calendar_dates() {
        let day = |d| NaiveDate::from_ymd_opt(2019, 12, d).unwrap();

        let deadline = Task::deadline("d", at(2019, 12, 2, 23, 59));
        assert!(deadline.occurs_on(day(2)));
        assert!(!deadline.occurs_on(day(3)));

        let event = Task::event("e", at(2019, 12, 2, 22, 0), at(2019, 12, 4, 1, 0)).unwrap();
        assert!(!event.occurs_on(day(1)));
        assert!(event.occurs_on(day(2)));
        assert!(event.occurs_on(day(3)));
        assert!(event.occurs_on(day(4)));
        assert!(!event.occurs_on(day(5)));

        assert!(!Task::todo("t").occurs_on(day(2)));
    }

    #[test]
    fn keyword_match_ignores_case() {
        let task = Task::todo("Read BOOK");
        assert!(task.description_contains("book"));
        assert!(task.description_contains("ReAd"));
        assert!(!task.description_contains("pen"));
    }
}
