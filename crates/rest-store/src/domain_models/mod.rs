//! Domain models held in the state slices
//!
//! Records are kept exactly as the backend served them. Only the `id` field
//! is interpreted, so reducers can find a record again; every other field
//! passes through untouched.

mod employee;
mod record_id;
mod task;

pub use employee::Employee;
pub use record_id::RecordId;
pub use task::Task;

use serde_json::Value;

/// A record that lives in an id-keyed collection slice
pub trait Record {
    /// The record as served by the backend
    fn as_value(&self) -> &Value;

    /// The record's `id` field, if it is an integer or a string
    fn id(&self) -> Option<RecordId> {
        self.as_value().get("id").and_then(RecordId::from_value)
    }
}
