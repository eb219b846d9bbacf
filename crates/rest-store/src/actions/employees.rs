//! Employees slice actions

use crate::actions::ApiErrorPayload;
use crate::domain_models::Employee;

/// Actions for the employees slice
#[derive(Debug, Clone, PartialEq)]
pub enum EmployeeAction {
    ApiRequested,
    ApiRequestFailed(ApiErrorPayload),
    Received(Vec<Employee>),
    /// Append an employee returned by the backend
    Added(Employee),
    /// Add an employee locally; the reducer assigns the next free id
    Add { name: String },
}
