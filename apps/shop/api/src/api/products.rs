use axum::Router;
use domain_products::handlers;

use crate::state::AppState;

/// Versioned products routes, mounted under `/api/products`.
pub fn router(state: &AppState) -> Router {
    handlers::router(state.product_service())
}

/// Products routes pinned to v1, mounted at `/products`.
pub fn minimal_router(state: &AppState) -> Router {
    handlers::minimal_router(state.product_service())
}

pub fn categories_router(state: &AppState) -> Router {
    handlers::categories_router(state.product_service())
}
