use serde::Serialize;

use crate::domain_models::Task;

/// Tasks slice
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TasksState {
    pub tasks: Vec<Task>,
    /// A request started with an on-start tag has not settled yet
    pub loading: bool,
    /// Message of the last failed request, cleared by the next successful load
    pub error: Option<String>,
}
