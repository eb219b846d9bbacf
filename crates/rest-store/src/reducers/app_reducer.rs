use crate::actions::Action;
use crate::reducers::{employees_reducer::reduce_employees, tasks_reducer::reduce_tasks};
use crate::state::AppState;

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer that routes each tagged action to its slice
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Tasks(action) => {
            state.tasks = reduce_tasks(state.tasks, action);
        }
        Action::Employees(action) => {
            state.employees = reduce_employees(state.employees, action);
        }
        Action::ApiCallBegan(request) => {
            // Only reachable when no ApiMiddleware is installed
            log::warn!(
                "Intent {} {} reached the reducer; no request was made",
                request.method,
                request.url
            );
        }
        Action::None => {}
    }

    state
}
