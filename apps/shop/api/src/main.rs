use axum::Router;
use axum_helpers::server::{create_production_app, create_router_with_root, health_router};
use core_config::FromEnv;
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

/// Compose the API, the minimal `/products` surface, docs and health routes.
async fn build_app(state: &AppState) -> std::io::Result<Router> {
    let router = create_router_with_root::<openapi::ApiDoc>(
        api::routes(state),
        api::root_routes(state),
    )
    .await?;

    Ok(router
        .merge(health_router(state.config.app))
        .merge(api::ready_router(state.clone())))
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    let config = Config::from_env()?;

    init_tracing(&config.environment);

    let state = AppState::new(config);
    info!(
        seeded = state.config.seed_database,
        "Product store initialized"
    );

    let app = build_app(&state).await?;

    info!(
        "Starting shop API with graceful shutdown ({:?} timeout)",
        state.config.server.shutdown_timeout
    );

    create_production_app(
        app,
        &state.config.server,
        state.config.server.shutdown_timeout,
        async move {
            info!("Shop API stopped");
        },
    )
    .await?;

    Ok(())
}
