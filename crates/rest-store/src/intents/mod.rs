//! Intent builders
//!
//! Pure functions turning a logical operation on a REST resource into an
//! `ApiCallBegan` action. No I/O happens here and inputs are not validated.

pub mod employees;
pub mod tasks;

use rest_client::HttpMethod;
use serde_json::Value;

use crate::actions::{ApiRequest, OnError, OnStart, OnSuccess};
use crate::domain_models::RecordId;

/// Logical operation on a collection resource
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    List,
    Create(Value),
    Update { id: RecordId, data: Value },
    Delete { id: RecordId },
}

impl Operation {
    pub fn method(&self) -> HttpMethod {
        match self {
            Operation::List => HttpMethod::Get,
            Operation::Create(_) => HttpMethod::Post,
            Operation::Update { .. } => HttpMethod::Patch,
            Operation::Delete { .. } => HttpMethod::Delete,
        }
    }
}

/// Follow-up tags of one intent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FollowUps {
    pub on_start: Option<OnStart>,
    pub on_success: OnSuccess,
    pub on_error: OnError,
}

/// Build the intent for `operation` on `/{resource}`
pub fn build_intent(resource: &str, operation: Operation, follow_ups: FollowUps) -> ApiRequest {
    let method = operation.method();
    let (url, data) = match operation {
        Operation::List => (format!("/{resource}"), None),
        Operation::Create(data) => (format!("/{resource}"), Some(data)),
        Operation::Update { id, data } => (format!("/{resource}/{id}"), Some(data)),
        Operation::Delete { id } => (format!("/{resource}/{id}"), None),
    };

    ApiRequest {
        url,
        method,
        data,
        on_start: follow_ups.on_start,
        on_success: follow_ups.on_success,
        on_error: follow_ups.on_error,
    }
}
