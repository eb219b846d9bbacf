//! Tasks slice actions

use crate::actions::ApiErrorPayload;
use crate::domain_models::{RecordId, Task};

/// Actions for the tasks slice
#[derive(Debug, Clone, PartialEq)]
pub enum TaskAction {
    // Request lifecycle
    /// A task request is in flight
    ApiRequested,
    /// A task request failed
    ApiRequestFailed(ApiErrorPayload),

    // Collection updates
    /// Replace the whole list with the loaded tasks
    Received(Vec<Task>),
    /// Append a task
    Added(Task),
    /// Replace the task with the same id
    Updated(Task),
    /// Remove the task with this id
    Removed { id: RecordId },
}
