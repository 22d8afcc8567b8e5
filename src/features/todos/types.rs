use serde::{Deserialize, Serialize};

/// Row shape of the provider's `todos` table.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: i64,
    pub task: String,
    #[serde(default)]
    pub is_complete: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_deserialize_with_and_without_completion() {
        let json = r#"[
            {"id": 1, "task": "Read chapter 4", "is_complete": true},
            {"id": 2, "task": "Submit lab report"}
        ]"#;

        let todos: Vec<Todo> = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(todos.len(), 2);
        assert!(todos[0].is_complete);
        assert!(!todos[1].is_complete);
        assert_eq!(todos[1].task, "Submit lab report");
    }
}
