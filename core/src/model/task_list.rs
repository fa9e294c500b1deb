use crate::error::{Result, TodoError};
use crate::model::task::Task;

/// Tasks in insertion order. Indices are 0-based here and 1-based on screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn add(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Resolves an index that came straight from the parser (it may be
    /// negative or past the end).
    pub fn get_mut_checked(&mut self, index: i64) -> Result<&mut Task> {
        let position = self.check_index(index)?;
        Ok(&mut self.tasks[position])
    }

    pub fn remove_checked(&mut self, index: i64) -> Result<Task> {
        let position = self.check_index(index)?;
        Ok(self.tasks.remove(position))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }

    fn check_index(&self, index: i64) -> Result<usize> {
        usize::try_from(index)
            .ok()
            .filter(|&position| position < self.tasks.len())
            .ok_or(TodoError::TaskNotFound {
                number: index + 1,
                count: self.tasks.len(),
            })
    }
}

impl From<Vec<Task>> for TaskList {
    fn from(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TaskList {
        TaskList::from(vec![Task::todo("a"), Task::todo("b")])
    }

    #[test]
    fn checked_access_within_bounds() {
        let mut list = sample();
        assert_eq!(list.get_mut_checked(1).unwrap().description, "b");
        let removed = list.remove_checked(0).unwrap();
        assert_eq!(removed.description, "a");
        assert_eq!(list.len(), 1);
        assert_eq!(list.get(0).map(|t| t.description.as_str()), Some("b"));
    }

    #[test]
    fn out_of_range_reports_user_number() {
        let mut list = sample();
        assert_eq!(
            list.get_mut_checked(2).unwrap_err(),
            TodoError::TaskNotFound { number: 3, count: 2 }
        );
        assert_eq!(
            list.remove_checked(-1).unwrap_err(),
            TodoError::TaskNotFound { number: 0, count: 2 }
        );
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn empty_list_rejects_everything() {
        let mut list = TaskList::new();
        assert!(list.is_empty());
        assert!(list.get_mut_checked(0).is_err());
    }
}
