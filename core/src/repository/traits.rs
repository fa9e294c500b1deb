use crate::model::task::Task;

/// Where the task list lives between runs.
///
/// Both calls are best-effort: failures are logged by the implementation and
/// never reach the caller.
pub trait TaskStore {
    fn load(&self) -> Vec<Task>;
    fn save(&self, tasks: &[Task]);
}

