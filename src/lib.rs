pub mod auth;
pub mod config;
pub mod db;
pub mod logging;
pub mod response;
pub mod routes;
pub mod seed;
pub mod services;
pub mod state;

use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::Config;
use crate::db::{DatabaseProxy, DbInitError};
use crate::state::AppState;

/// Opens the database named by `config`, applies the schema, seeds an empty catalog and
/// returns the fully layered router.
pub async fn create_app(config: Config) -> Result<axum::Router, DbInitError> {
    let proxy = DatabaseProxy::connect(&config.database_url).await?;
    proxy.migrate().await?;
    seed::seed_catalog(&proxy).await?;

    Ok(app_with_state(AppState::new(proxy, config)))
}

pub fn app_with_state(state: AppState) -> axum::Router {
    routes::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
