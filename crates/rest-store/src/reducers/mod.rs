pub mod app_reducer;
pub mod collection;
pub mod employees_reducer;
pub mod tasks_reducer;

pub use app_reducer::reduce;
