//! Redux-style state container wired to a REST backend
//!
//! Intent builders describe HTTP calls as `ApiCallBegan` actions, the
//! `ApiMiddleware` performs them and dispatches typed follow-up actions, and
//! slice reducers apply those to the owned `AppState`.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use rest_client::ReqwestClient;
//! use rest_store::intents::tasks::load_tasks;
//! use rest_store::middleware::{ApiMiddleware, LoggingMiddleware};
//! use rest_store::{AppState, Store};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = Arc::new(ReqwestClient::new("http://localhost:5001/api")?);
//! let mut store = Store::new(AppState::default());
//! store.add_middleware(Box::new(LoggingMiddleware::new()));
//! store.add_middleware(Box::new(ApiMiddleware::new(client, tokio::runtime::Handle::current())));
//!
//! store.dispatch(load_tasks());
//! store.run_until_idle().await;
//! println!("{:?}", store.state().tasks);
//! # Ok(())
//! # }
//! ```

pub mod actions;
pub mod dispatcher;
pub mod domain_models;
pub mod intents;
pub mod logger;
pub mod middleware;
pub mod reducers;
pub mod state;
pub mod store;

pub use actions::Action;
pub use dispatcher::{Dispatcher, Envelope};
pub use state::AppState;
pub use store::{Store, SubscriptionId};
