use axum::http::{HeaderName, HeaderValue, Method, header};
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Headers clients may send besides the CORS-safelisted ones.
const ALLOWED_HEADERS: [HeaderName; 4] = [
    header::CONTENT_TYPE,
    header::AUTHORIZATION,
    header::ACCEPT,
    HeaderName::from_static("x-api-version"),
];

/// Response headers readable from browser scripts.
const EXPOSED_HEADERS: [HeaderName; 2] = [
    header::LOCATION,
    HeaderName::from_static("api-supported-versions"),
];

/// Creates a CORS layer for the given origins.
///
/// - Methods: GET, POST, PUT, DELETE, PATCH, OPTIONS
/// - Request headers: Content-Type, Authorization, Accept, X-API-Version
/// - Exposes `Location` and `api-supported-versions`
/// - 1 hour max age
pub fn create_cors_layer(allowed_origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allow_headers(ALLOWED_HEADERS)
        .expose_headers(EXPOSED_HEADERS)
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}
