//! Readiness check backed by the product store.

use crate::state::AppState;
use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use axum_helpers::server::{HealthCheckFuture, run_health_checks};

pub async fn ready_handler(State(state): State<AppState>) -> Response {
    let service = state.product_service();
    let checks: Vec<(&str, HealthCheckFuture<'_>)> = vec![(
        "store",
        Box::pin(async move {
            service
                .ping()
                .await
                .map_err(|e| format!("Store check failed: {}", e))
        }),
    )];

    match run_health_checks(checks).await {
        Ok((status, json)) => (status, json).into_response(),
        Err((status, json)) => (status, json).into_response(),
    }
}
