//! Application State Module
//!
//! Contains all state types used by the application, one per slice.

mod app;
mod employees;
mod tasks;

pub use app::AppState;
pub use employees::EmployeesState;
pub use tasks::TasksState;
