//! API version negotiation.
//!
//! A version may be requested through the `api-version` query parameter, the
//! `X-API-Version` header, or a `ver` media type parameter on `Accept` or
//! `Content-Type` (`application/json; ver=2.0`). All readers that are present
//! must agree. No version means [`ApiVersion::V1`].

use std::str::FromStr;

use axum::{
    extract::{Query, Request},
    http::{HeaderMap, HeaderName, HeaderValue, Uri, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use strum::Display;

use crate::error::{ProductError, ProductResult};

pub const VERSION_QUERY_PARAM: &str = "api-version";
pub const VERSION_HEADER: HeaderName = HeaderName::from_static("x-api-version");
pub const MEDIA_TYPE_VERSION_PARAM: &str = "ver";
pub const SUPPORTED_VERSIONS_HEADER: HeaderName =
    HeaderName::from_static("api-supported-versions");
pub const SUPPORTED_VERSIONS: &str = "1.0, 2.0";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum ApiVersion {
    /// General listing: no implicit availability filter.
    #[default]
    #[strum(to_string = "1.0")]
    V1,
    /// Listing restricted to available products.
    #[strum(to_string = "2.0")]
    V2,
}

impl ApiVersion {
    pub fn available_only(self) -> bool {
        matches!(self, ApiVersion::V2)
    }
}

impl FromStr for ApiVersion {
    type Err = ProductError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" | "1.0" => Ok(ApiVersion::V1),
            "2" | "2.0" => Ok(ApiVersion::V2),
            other => Err(ProductError::UnsupportedApiVersion(other.to_string())),
        }
    }
}

/// How a router picks its version.
///
/// Insert `VersionPolicy::Fixed` as a request extension to pin a surface to
/// one version and skip negotiation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VersionPolicy {
    #[default]
    Negotiate,
    Fixed(ApiVersion),
}

/// Percent-decoded `api-version` values from the query string. A query that
/// does not parse yields none; the handler's own extractor rejects it.
fn query_versions(uri: &Uri) -> Vec<String> {
    let Ok(Query(pairs)) = Query::<Vec<(String, String)>>::try_from_uri(uri) else {
        return Vec::new();
    };

    pairs
        .into_iter()
        .filter(|(key, _)| key.eq_ignore_ascii_case(VERSION_QUERY_PARAM))
        .map(|(_, value)| value)
        .collect()
}

fn media_type_versions(value: &str) -> Vec<&str> {
    value
        .split(',')
        .flat_map(|media_range| media_range.split(';').skip(1))
        .filter_map(|param| param.split_once('='))
        .filter(|(key, _)| key.trim().eq_ignore_ascii_case(MEDIA_TYPE_VERSION_PARAM))
        .map(|(_, value)| value.trim().trim_matches('"'))
        .collect()
}

/// Resolve the requested version from the URI and headers.
pub fn negotiate(uri: &Uri, headers: &HeaderMap) -> ProductResult<ApiVersion> {
    let mut requested: Vec<String> = query_versions(uri);

    for value in headers.get_all(&VERSION_HEADER) {
        let value = value
            .to_str()
            .map_err(|_| ProductError::UnsupportedApiVersion("<non-ascii>".to_string()))?;
        requested.extend(value.split(',').map(|v| v.trim().to_string()));
    }

    for name in [header::ACCEPT, header::CONTENT_TYPE] {
        for value in headers.get_all(&name) {
            if let Ok(value) = value.to_str() {
                requested.extend(media_type_versions(value).into_iter().map(str::to_string));
            }
        }
    }

    let mut resolved: Option<ApiVersion> = None;
    for raw in requested.iter().map(|v| v.trim()).filter(|v| !v.is_empty()) {
        let version = ApiVersion::from_str(raw)?;
        match resolved {
            Some(previous) if previous != version => {
                return Err(ProductError::UnsupportedApiVersion(format!(
                    "ambiguous: {} and {}",
                    previous, version
                )));
            }
            _ => resolved = Some(version),
        }
    }

    Ok(resolved.unwrap_or_default())
}

/// Middleware that resolves the [`ApiVersion`] into request extensions and
/// reports supported versions on every response.
pub async fn api_versioning(mut request: Request, next: Next) -> Response {
    let policy = request
        .extensions()
        .get::<VersionPolicy>()
        .copied()
        .unwrap_or_default();

    let resolved = match policy {
        VersionPolicy::Fixed(version) => Ok(version),
        VersionPolicy::Negotiate => negotiate(request.uri(), request.headers()),
    };

    let mut response = match resolved {
        Ok(version) => {
            request.extensions_mut().insert(version);
            next.run(request).await
        }
        Err(err) => err.into_response(),
    };

    response.headers_mut().insert(
        SUPPORTED_VERSIONS_HEADER,
        HeaderValue::from_static(SUPPORTED_VERSIONS),
    );
    response
}
