//! Tasks Reducer
//!
//! Handles state updates for the tasks slice using tagged TaskAction.

use crate::actions::TaskAction;
use crate::domain_models::Record;
use crate::reducers::collection;
use crate::state::TasksState;

/// Reducer for the tasks slice.
///
/// Accepts only TaskAction, making it type-safe and focused.
pub fn reduce_tasks(mut state: TasksState, action: &TaskAction) -> TasksState {
    match action {
        TaskAction::ApiRequested => {
            state.loading = true;
        }

        TaskAction::ApiRequestFailed(payload) => {
            state.loading = false;
            state.error = Some(payload.error.clone());
            log::error!("Task request failed: {}", payload.error);
        }

        TaskAction::Received(tasks) => {
            state.tasks = tasks.clone();
            state.loading = false;
            state.error = None;
            log::info!("Loaded {} tasks", tasks.len());
        }

        TaskAction::Added(task) => {
            collection::append(&mut state.tasks, task.clone());
        }

        TaskAction::Updated(task) => {
            if !collection::replace_by_id(&mut state.tasks, task.clone()) {
                log::warn!("Updated: task {:?} not found in state", task.id());
            }
        }

        TaskAction::Removed { id } => {
            if !collection::remove_by_id(&mut state.tasks, id) {
                log::warn!("Removed: task {} not found in state", id);
            }
        }
    }

    state
}
