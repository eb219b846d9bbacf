//! Employee intents

use serde_json::json;

use super::{build_intent, FollowUps, Operation};
use crate::actions::{Action, OnError, OnStart, OnSuccess};

const RESOURCE: &str = "employees";

/// GET /employees
pub fn load_employees() -> Action {
    build_intent(
        RESOURCE,
        Operation::List,
        FollowUps {
            on_start: Some(OnStart::EmployeesRequested),
            on_success: OnSuccess::EmployeesReceived,
            on_error: OnError::EmployeesRequestFailed,
        },
    )
    .into()
}

/// POST /employees with `{ "name": name }`
pub fn add_new_employee(name: &str) -> Action {
    build_intent(
        RESOURCE,
        Operation::Create(json!({ "name": name })),
        FollowUps {
            on_start: None,
            on_success: OnSuccess::EmployeeAdded,
            on_error: OnError::EmployeesRequestFailed,
        },
    )
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_employees_tracks_loading() {
        let Action::ApiCallBegan(request) = load_employees() else {
            panic!("expected intent");
        };
        assert_eq!(request.url, "/employees");
        assert_eq!(request.on_start, Some(OnStart::EmployeesRequested));
    }

    #[test]
    fn test_add_new_employee_body() {
        let Action::ApiCallBegan(request) = add_new_employee("Ada") else {
            panic!("expected intent");
        };
        assert_eq!(request.data, Some(json!({ "name": "Ada" })));
        assert_eq!(request.on_success, OnSuccess::EmployeeAdded);
    }
}
