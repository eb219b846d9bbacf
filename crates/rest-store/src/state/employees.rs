use serde::Serialize;

use crate::domain_models::{Employee, Record, RecordId};

/// Employees slice
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EmployeesState {
    pub employees: Vec<Employee>,
    pub loading: bool,
    pub error: Option<String>,
}

impl EmployeesState {
    /// Id for a locally added employee: one past the highest numeric id
    ///
    /// Text ids are skipped. Returns None once the highest id is `i64::MAX`.
    pub fn next_id(&self) -> Option<RecordId> {
        let highest = self
            .employees
            .iter()
            .filter_map(|employee| employee.id().and_then(|id| id.as_number()))
            .max();

        match highest {
            Some(id) => id.checked_add(1).map(RecordId::from),
            None => Some(RecordId::from(1)),
        }
    }
}
