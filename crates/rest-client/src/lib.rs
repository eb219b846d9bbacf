//! JSON REST client
//!
//! This crate provides a trait-based HTTP client that speaks JSON to a single
//! backend. The trait is the seam the state container's API middleware talks
//! to, so tests can swap in a scripted client without a network.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │               RestClient trait                   │
//! │  - request(HttpRequest) -> JSON body             │
//! └─────────────────────────────────────────────────┘
//!                        │
//!        ┌───────────────┴───────────────┐
//!        ▼                               ▼
//! ┌─────────────────┐         ┌─────────────────────┐
//! │  ReqwestClient  │         │  test doubles       │
//! │  (real HTTP)    │         │  (scripted bodies)  │
//! └─────────────────┘         └─────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use rest_client::{HttpRequest, ReqwestClient, RestClient};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = ReqwestClient::new("http://localhost:5001/api")?;
//! let tasks = client.request(&HttpRequest::get("/tasks")).await?;
//! println!("{tasks}");
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod reqwest_client;
pub mod types;

pub use client::RestClient;
pub use error::ClientError;
pub use reqwest_client::ReqwestClient;
pub use types::{HttpMethod, HttpRequest};
