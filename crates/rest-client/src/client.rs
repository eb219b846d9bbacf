//! REST client trait
//!
//! Defines the `RestClient` trait every client implementation satisfies.

use crate::types::HttpRequest;
use async_trait::async_trait;
use serde_json::Value;

/// JSON REST client
///
/// Implementations resolve the request path against their base URL, send
/// the optional JSON body and hand back the decoded response body.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so one client can be shared by
/// every request task the middleware spawns.
///
/// # Example
///
/// ```rust,ignore
/// use rest_client::{HttpRequest, RestClient};
///
/// async fn list_tasks(client: &dyn RestClient) -> anyhow::Result<serde_json::Value> {
///     client.request(&HttpRequest::get("/tasks")).await
/// }
/// ```
#[async_trait]
pub trait RestClient: Send + Sync {
    /// Perform a single request
    ///
    /// # Returns
    ///
    /// The JSON-decoded response body on a 2xx status. An empty body is
    /// `Value::Null` and a body that is not JSON comes back as a string.
    /// Transport failures and any other status are errors whose `Display`
    /// is the message surfaced to the state container.
    async fn request(&self, request: &HttpRequest) -> anyhow::Result<Value>;
}
