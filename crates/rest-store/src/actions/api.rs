//! API intent actions
//!
//! An `ApiRequest` describes one HTTP call plus the follow-up actions to emit
//! once it settles. Follow-ups are tags, not actions: the middleware turns a
//! tag and the call's outcome into the concrete action.
//!
//! Each lifecycle phase has its own tag enum, so an on-error tag can always
//! be built from an error payload and a success tag always knows which slice
//! its body belongs to. Success bodies are taken as served; nothing about
//! their shape is checked.

use rest_client::{HttpMethod, HttpRequest};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::actions::{Action, EmployeeAction, TaskAction};
use crate::domain_models::RecordId;

/// Payload of every failure follow-up
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorPayload {
    pub error: String,
}

impl ApiErrorPayload {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Emitted before the request is issued
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnStart {
    TasksRequested,
    EmployeesRequested,
}

impl OnStart {
    pub fn into_action(self) -> Action {
        match self {
            OnStart::TasksRequested => TaskAction::ApiRequested.into(),
            OnStart::EmployeesRequested => EmployeeAction::ApiRequested.into(),
        }
    }
}

/// Emitted with the response body of a successful request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OnSuccess {
    TasksReceived,
    TaskAdded,
    TaskUpdated,
    /// Delete responses carry no record, so the tag keeps the id
    TaskRemoved { id: RecordId },
    EmployeesReceived,
    EmployeeAdded,
}

impl OnSuccess {
    /// Wrap the response body in this tag's action
    pub fn into_action(&self, body: Value) -> Action {
        match self {
            OnSuccess::TasksReceived => TaskAction::Received(records(body)).into(),
            OnSuccess::TaskAdded => TaskAction::Added(body.into()).into(),
            OnSuccess::TaskUpdated => TaskAction::Updated(body.into()).into(),
            OnSuccess::TaskRemoved { id } => TaskAction::Removed { id: id.clone() }.into(),
            OnSuccess::EmployeesReceived => EmployeeAction::Received(records(body)).into(),
            OnSuccess::EmployeeAdded => EmployeeAction::Added(body.into()).into(),
        }
    }
}

/// Records of a list body
///
/// An array yields its elements and `null` yields none. Any other body is
/// kept as the only record.
fn records<T: From<Value>>(body: Value) -> Vec<T> {
    match body {
        Value::Array(items) => items.into_iter().map(T::from).collect(),
        Value::Null => Vec::new(),
        other => {
            log::warn!("List response is not an array, keeping it as one record");
            vec![T::from(other)]
        }
    }
}

/// Emitted with an error descriptor when the request fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnError {
    TasksRequestFailed,
    EmployeesRequestFailed,
}

impl OnError {
    pub fn into_action(self, payload: ApiErrorPayload) -> Action {
        match self {
            OnError::TasksRequestFailed => TaskAction::ApiRequestFailed(payload).into(),
            OnError::EmployeesRequestFailed => EmployeeAction::ApiRequestFailed(payload).into(),
        }
    }
}

/// Intent action: one HTTP call and its follow-ups
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// Path below the configured base URL
    pub url: String,
    pub method: HttpMethod,
    pub data: Option<Value>,
    pub on_start: Option<OnStart>,
    pub on_success: OnSuccess,
    pub on_error: OnError,
}

impl ApiRequest {
    /// The transport-level request, without the follow-up tags
    pub fn to_http_request(&self) -> HttpRequest {
        HttpRequest {
            method: self.method,
            path: self.url.clone(),
            body: self.data.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::Task;
    use serde_json::json;

    #[test]
    fn test_on_start_maps_to_slice() {
        assert_eq!(
            OnStart::TasksRequested.into_action(),
            Action::Tasks(TaskAction::ApiRequested)
        );
        assert_eq!(
            OnStart::EmployeesRequested.into_action(),
            Action::Employees(EmployeeAction::ApiRequested)
        );
    }

    #[test]
    fn test_on_success_wraps_list() {
        let action = OnSuccess::TasksReceived.into_action(json!([{ "id": 1, "name": "a" }]));
        assert_eq!(
            action,
            Action::Tasks(TaskAction::Received(vec![Task::new(1, "a")]))
        );
    }

    #[test]
    fn test_on_success_passes_body_through_unchecked() {
        let body = json!([{ "id": "1", "name": "a", "task": "b", "extra": [1, 2] }]);
        let action = OnSuccess::TasksReceived.into_action(body.clone());
        match action {
            Action::Tasks(TaskAction::Received(tasks)) => {
                assert_eq!(serde_json::to_value(&tasks).unwrap(), body);
            }
            other => panic!("expected received tasks, got {other:?}"),
        }
    }

    #[test]
    fn test_on_success_list_of_non_array_body() {
        assert_eq!(
            OnSuccess::EmployeesReceived.into_action(Value::Null),
            Action::Employees(EmployeeAction::Received(Vec::new()))
        );
        assert_eq!(
            OnSuccess::TasksReceived.into_action(json!({ "id": 1 })),
            Action::Tasks(TaskAction::Received(vec![Task::from(json!({ "id": 1 }))]))
        );
    }

    #[test]
    fn test_on_success_keeps_text_body() {
        assert_eq!(
            OnSuccess::TaskAdded.into_action(json!("OK")),
            Action::Tasks(TaskAction::Added(Task::from(json!("OK"))))
        );
    }

    #[test]
    fn test_task_removed_ignores_body() {
        let action = OnSuccess::TaskRemoved { id: 3.into() }.into_action(json!({ "ok": true }));
        assert_eq!(action, Action::Tasks(TaskAction::Removed { id: 3.into() }));
    }

    #[test]
    fn test_on_error_carries_payload() {
        let action = OnError::TasksRequestFailed.into_action(ApiErrorPayload::new("timeout"));
        assert_eq!(
            action,
            Action::Tasks(TaskAction::ApiRequestFailed(ApiErrorPayload::new("timeout")))
        );
    }

    #[test]
    fn test_error_payload_serializes_as_error_object() {
        let value = serde_json::to_value(ApiErrorPayload::new("boom")).unwrap();
        assert_eq!(value, json!({ "error": "boom" }));
    }
}
