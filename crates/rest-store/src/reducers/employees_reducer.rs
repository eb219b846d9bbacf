//! Employees Reducer

use crate::actions::EmployeeAction;
use crate::domain_models::Employee;
use crate::reducers::collection;
use crate::state::EmployeesState;

pub fn reduce_employees(mut state: EmployeesState, action: &EmployeeAction) -> EmployeesState {
    match action {
        EmployeeAction::ApiRequested => {
            state.loading = true;
        }
        EmployeeAction::ApiRequestFailed(payload) => {
            state.loading = false;
            state.error = Some(payload.error.clone());
            log::error!("Employee request failed: {}", payload.error);
        }
        EmployeeAction::Received(employees) => {
            state.employees = employees.clone();
            state.loading = false;
            state.error = None;
        }
        EmployeeAction::Added(employee) => {
            collection::append(&mut state.employees, employee.clone());
        }
        EmployeeAction::Add { name } => match state.next_id() {
            Some(id) => {
                log::debug!("Adding employee {} locally", id);
                collection::append(&mut state.employees, Employee::new(id, name.clone()));
            }
            None => {
                log::warn!("Add: no free employee id left, ignoring {}", name);
            }
        },
    }

    state
}
