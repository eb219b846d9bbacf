//! Actions module
//!
//! All actions in the application, tagged by slice. The API intent is the
//! only action the middleware consumes; everything else reaches reducers.

pub mod api;
pub mod employees;
pub mod tasks;

pub use api::{ApiErrorPayload, ApiRequest, OnError, OnStart, OnSuccess};
pub use employees::EmployeeAction;
pub use tasks::TaskAction;

/// Root action enum - tagged by slice
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Declarative description of a pending network call.
    /// Handled by `ApiMiddleware`, never by reducers.
    ApiCallBegan(ApiRequest),

    /// Tasks slice actions
    Tasks(TaskAction),
    /// Employees slice actions
    Employees(EmployeeAction),

    /// No-op action
    None,
}

impl From<TaskAction> for Action {
    fn from(action: TaskAction) -> Self {
        Action::Tasks(action)
    }
}

impl From<EmployeeAction> for Action {
    fn from(action: EmployeeAction) -> Self {
        Action::Employees(action)
    }
}

impl From<ApiRequest> for Action {
    fn from(request: ApiRequest) -> Self {
        Action::ApiCallBegan(request)
    }
}
