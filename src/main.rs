use std::sync::Arc;

use crate::api::plans::AppState;
use crate::config::Config;
use crate::store::PlanStore;
use crate::store::memory::MemoryPlanStore;

mod api;
mod config;
mod models;
mod scheduler;
mod services;
mod store;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    let store: Arc<dyn PlanStore> = Arc::new(MemoryPlanStore::new());
    let _scheduler = scheduler::start_scheduler(Arc::clone(&store), &config.purge_schedule).await?;

    let state = AppState {
        config: config.clone(),
        store,
    };

    let app = api::router(state);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;
    tracing::info!(port = %config.port, plan_ttl_days = config.plan_ttl_days, "server.listening");
    axum::serve(listener, app).await?;
    Ok(())
}
