//! Middleware system for the Redux architecture
//!
//! Middleware sits between action dispatch and reducer execution:
//!
//! ```text
//! Action → Middleware Chain → Reducer → State → Subscribers
//! ```
//!
//! Each middleware can inspect actions and state, dispatch new actions, start
//! side effects, and consume an action so it never reaches the reducer.

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::state::AppState;

pub mod api_middleware;
pub mod logging;

pub use api_middleware::ApiMiddleware;
pub use logging::LoggingMiddleware;

/// Middleware trait - intercepts actions before they reach the reducer
///
/// `handle` runs synchronously on the store's task. Long-running work (network
/// calls) must be spawned and report back through the dispatcher, so one slow
/// request never holds up the actions behind it.
pub trait Middleware: Send {
    /// Handle an action
    ///
    /// - `action`: The action to process
    /// - `state`: Current application state (read-only snapshot)
    /// - `dispatcher`: Use to dispatch actions that should re-enter middleware chain
    ///
    /// Returns `true` to continue chain, `false` to consume action
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool;
}
