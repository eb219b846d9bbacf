//! API Middleware
//!
//! The single place where network I/O happens. For every `ApiCallBegan`
//! intent it:
//! - queues the on-start action (if any) before the request exists
//! - spawns exactly one request task on the runtime
//! - queues exactly one terminal action when the request settles:
//!   on-success with the response body as served, or on-error with
//!   `{ error: message }`
//!
//! Every other action passes through untouched. Intents are consumed and
//! never reach the reducer.

use crate::actions::{Action, ApiErrorPayload, ApiRequest};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use rest_client::RestClient;
use serde_json::Value;
use std::sync::Arc;
use tokio::runtime::Handle;

/// Middleware performing the HTTP call described by an intent
pub struct ApiMiddleware {
    client: Arc<dyn RestClient>,
    /// Runtime the request tasks are spawned on
    runtime: Handle,
}

impl ApiMiddleware {
    pub fn new(client: Arc<dyn RestClient>, runtime: Handle) -> Self {
        Self { client, runtime }
    }

    /// Start the request for `request`; the terminal action arrives via `dispatcher`
    fn start_request(&self, request: &ApiRequest, dispatcher: &Dispatcher) {
        if let Some(on_start) = request.on_start {
            dispatcher.dispatch(on_start.into_action());
        }

        let client = Arc::clone(&self.client);
        let request = request.clone();
        let in_flight = dispatcher.begin_request();

        log::debug!("ApiMiddleware: {} {} started", request.method, request.url);

        self.runtime.spawn(async move {
            let outcome = client.request(&request.to_http_request()).await;
            in_flight.settle(terminal_action(&request, outcome));
        });
    }
}

/// Turn a settled request into its one terminal action
pub fn terminal_action(request: &ApiRequest, outcome: anyhow::Result<Value>) -> Action {
    match outcome {
        Ok(body) => {
            log::debug!("ApiMiddleware: {} {} succeeded", request.method, request.url);
            request.on_success.into_action(body)
        }
        Err(e) => {
            log::warn!(
                "ApiMiddleware: {} {} failed: {}",
                request.method,
                request.url,
                e
            );
            request.on_error.into_action(ApiErrorPayload::new(e.to_string()))
        }
    }
}

impl Middleware for ApiMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::ApiCallBegan(request) => {
                self.start_request(request, dispatcher);
                false // Consume: intents are not state changes
            }
            _ => true,
        }
    }
}
