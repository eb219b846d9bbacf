//! Task intents

use serde_json::{json, Value};

use super::{build_intent, FollowUps, Operation};
use crate::actions::{Action, OnError, OnStart, OnSuccess};
use crate::domain_models::RecordId;

const RESOURCE: &str = "tasks";

/// GET /tasks, tracking the loading flag
pub fn load_tasks() -> Action {
    build_intent(
        RESOURCE,
        Operation::List,
        FollowUps {
            on_start: Some(OnStart::TasksRequested),
            on_success: OnSuccess::TasksReceived,
            on_error: OnError::TasksRequestFailed,
        },
    )
    .into()
}

/// POST /tasks with `{ "task": name }`
pub fn add_new_task(name: &str) -> Action {
    build_intent(
        RESOURCE,
        Operation::Create(json!({ "task": name })),
        FollowUps {
            on_start: None,
            on_success: OnSuccess::TaskAdded,
            on_error: OnError::TasksRequestFailed,
        },
    )
    .into()
}

/// PATCH /tasks/{id} with the given fields
pub fn update_task(id: impl Into<RecordId>, data: Value) -> Action {
    build_intent(
        RESOURCE,
        Operation::Update {
            id: id.into(),
            data,
        },
        FollowUps {
            on_start: None,
            on_success: OnSuccess::TaskUpdated,
            on_error: OnError::TasksRequestFailed,
        },
    )
    .into()
}

/// DELETE /tasks/{id}
pub fn delete_task(id: impl Into<RecordId>) -> Action {
    let id = id.into();
    build_intent(
        RESOURCE,
        Operation::Delete { id: id.clone() },
        FollowUps {
            on_start: None,
            on_success: OnSuccess::TaskRemoved { id },
            on_error: OnError::TasksRequestFailed,
        },
    )
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::ApiRequest;
    use rest_client::HttpMethod;

    fn intent(action: Action) -> ApiRequest {
        match action {
            Action::ApiCallBegan(request) => request,
            other => panic!("expected intent, got {other:?}"),
        }
    }

    #[test]
    fn test_load_tasks() {
        let request = intent(load_tasks());
        assert_eq!(request.url, "/tasks");
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.on_start, Some(OnStart::TasksRequested));
        assert_eq!(request.on_success, OnSuccess::TasksReceived);
        assert_eq!(request.on_error, OnError::TasksRequestFailed);
    }

    #[test]
    fn test_add_new_task_posts_task_field() {
        let request = intent(add_new_task("Complete running"));
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.url, "/tasks");
        assert_eq!(request.data, Some(json!({ "task": "Complete running" })));
        assert_eq!(request.on_start, None);
    }

    #[test]
    fn test_delete_task_keeps_id_in_success_tag() {
        let request = intent(delete_task(9));
        assert_eq!(request.method, HttpMethod::Delete);
        assert_eq!(request.url, "/tasks/9");
        assert_eq!(request.on_success, OnSuccess::TaskRemoved { id: 9.into() });
    }

    #[test]
    fn test_delete_task_with_text_id() {
        let request = intent(delete_task("a1"));
        assert_eq!(request.url, "/tasks/a1");
        assert_eq!(request.on_success, OnSuccess::TaskRemoved { id: "a1".into() });
    }

    #[test]
    fn test_update_task() {
        let request = intent(update_task(2, json!({ "id": 2, "completed": true })));
        assert_eq!(request.method, HttpMethod::Patch);
        assert_eq!(request.url, "/tasks/2");
        assert_eq!(request.on_success, OnSuccess::TaskUpdated);
    }
}
