use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::{Record, RecordId};

/// An employee record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Employee(Value);

impl Employee {
    pub fn new(id: impl Into<RecordId>, name: impl Into<String>) -> Self {
        let id: RecordId = id.into();
        let name: String = name.into();
        Self(json!({ "id": id, "name": name }))
    }

    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(Value::as_str)
    }
}

impl From<Value> for Employee {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl Record for Employee {
    fn as_value(&self) -> &Value {
        &self.0
    }
}
