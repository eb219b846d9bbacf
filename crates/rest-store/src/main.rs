use anyhow::{Context, Result};
use rest_client::ReqwestClient;
use rest_store::actions::TaskAction;
use rest_store::intents::tasks::{load_tasks, update_task};
use rest_store::middleware::{ApiMiddleware, LoggingMiddleware};
use rest_store::{AppState, Store};
use rest_store_config::AppConfig;
use serde_json::json;
use std::sync::Arc;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Config errors go to stderr through anyhow; the logger needs the config first
    let config = AppConfig::load()?;

    if let Some(path) = rest_store::logger::init(&config)? {
        log::info!("Writing logs to {}", path.display());
    }

    log::debug!("Config: {:?}", config);
    log::info!("Starting rest-store against {}", config.base_url);

    let client = ReqwestClient::new(&config.base_url)
        .with_context(|| format!("Failed to create client for {}", config.base_url))?;

    // Initialize store with middleware
    let mut store = Store::new(AppState::default());

    // Add middleware in order (they execute in this order)
    store.add_middleware(Box::new(LoggingMiddleware::new()));
    store.add_middleware(Box::new(ApiMiddleware::new(
        Arc::new(client),
        tokio::runtime::Handle::current(),
    )));

    store.subscribe(|state| {
        log::info!(
            "tasks: {} (loading: {}, error: {:?})",
            state.tasks.tasks.len(),
            state.tasks.loading,
            state.tasks.error
        );
    });

    store.dispatch(load_tasks());
    store.dispatch(update_task(2, json!({ "id": 2, "completed": true })));
    store.dispatch(TaskAction::Removed { id: 2.into() }.into());

    store.run_until_idle().await;

    let output = serde_json::to_string_pretty(store.state()).context("Failed to serialize state")?;
    println!("{}", output);

    log::info!("Exiting rest-store");
    Ok(())
}
