use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::{Record, RecordId};

/// A task as served by `/tasks`
///
/// The backend names the description `task` on create and `name` elsewhere;
/// both are read, and whatever else the record carries is kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Task(Value);

impl Task {
    pub fn new(id: impl Into<RecordId>, name: impl Into<String>) -> Self {
        let id: RecordId = id.into();
        let name: String = name.into();
        Self(json!({ "id": id, "name": name }))
    }

    pub fn name(&self) -> Option<&str> {
        ["name", "task"]
            .iter()
            .find_map(|key| self.0.get(*key).and_then(Value::as_str))
    }

    pub fn is_completed(&self) -> bool {
        self.0
            .get("completed")
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    /// Set `completed`; records that are not JSON objects are left as they are
    pub fn with_completed(mut self, completed: bool) -> Self {
        if let Value::Object(fields) = &mut self.0 {
            fields.insert("completed".to_string(), Value::Bool(completed));
        }
        self
    }
}

impl From<Value> for Task {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl Record for Task {
    fn as_value(&self) -> &Value {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_accepts_backend_field_name() {
        let task = Task::from(json!({ "id": 7, "task": "Complete running" }));
        assert_eq!(task.name(), Some("Complete running"));
        assert!(!task.is_completed());
    }

    #[test]
    fn test_task_keeps_served_fields() {
        let served = json!({ "id": "t-1", "name": "a", "task": "b", "priority": 3 });
        let task = Task::from(served.clone());
        assert_eq!(task.id(), Some(RecordId::from("t-1")));
        assert_eq!(serde_json::to_value(&task).unwrap(), served);
    }

    #[test]
    fn test_new_serializes_only_given_fields() {
        let value = serde_json::to_value(Task::new(1, "a")).unwrap();
        assert_eq!(value, json!({ "id": 1, "name": "a" }));
    }

    #[test]
    fn test_task_without_id() {
        let task = Task::from(json!({ "name": "x" }));
        assert_eq!(task.id(), None);
        assert_eq!(task.with_completed(true).as_value()["completed"], json!(true));
    }
}
