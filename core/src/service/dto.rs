use serde::Serialize;

/// What one input line produced, for front ends that render a whole reply at
/// once (the chat window, `ask --json`).
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub output: String,
    /// Set only after `bye`; an error always clears it.
    pub exit: bool,
    pub task_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_field_names() {
        let response = Response {
            output: " Bye. Hope to see you again soon!".to_string(),
            exit: true,
            task_count: 3,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["exit"], true);
        assert_eq!(json["task_count"], 3);
        assert_eq!(json["output"], " Bye. Hope to see you again soon!");
    }
}
