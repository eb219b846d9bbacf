//! Application State

use serde::Serialize;

use super::{EmployeesState, TasksState};

/// Application state
///
/// Each slice owns its collection exclusively; only reducers replace it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AppState {
    pub tasks: TasksState,
    pub employees: EmployeesState,
}
