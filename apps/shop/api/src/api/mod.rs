use axum::Router;

pub mod health;
pub mod products;

/// Creates the API routes without the `/api` prefix.
/// The `/api` prefix is added by `create_router_with_root`.
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new()
        .nest("/products", products::router(state))
        .nest("/categories", products::categories_router(state))
}

/// Routes served outside `/api`.
pub fn root_routes(state: &crate::state::AppState) -> Router {
    Router::new().nest("/products", products::minimal_router(state))
}

/// Creates a router with the /ready endpoint.
pub fn ready_router(state: crate::state::AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
