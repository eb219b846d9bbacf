//! LoggingMiddleware - logs all actions for debugging

use super::Middleware;
use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::state::AppState;

/// LoggingMiddleware - logs every action passing through
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoggingMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for LoggingMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, _dispatcher: &Dispatcher) -> bool {
        if !matches!(action, Action::None) {
            log::debug!("Action: {:?}", action);
        }

        true
    }
}
