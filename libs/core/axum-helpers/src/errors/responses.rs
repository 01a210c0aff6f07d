//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "code": 2001,
        "error": "CONCURRENCY_CONFLICT",
        "message": "Product 3 was modified by another request"
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Validation Error",
    content_type = "application/json",
    example = json!({
        "code": 1001,
        "error": "VALIDATION_ERROR",
        "message": "Request validation failed",
        "details": {
            "price": [{
                "code": "range",
                "message": null,
                "params": {"min": 0.0, "value": -1.0}
            }]
        }
    })
)]
pub struct BadRequestValidationResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Invalid id",
    content_type = "application/json",
    example = json!({
        "code": 1002,
        "error": "INVALID_ID",
        "message": "Invalid id: abc"
    })
)]
pub struct BadRequestIdResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Path id does not match payload id",
    content_type = "application/json",
    example = json!({
        "code": 1007,
        "error": "ID_MISMATCH",
        "message": "Path id 5 does not match payload id 7"
    })
)]
pub struct IdMismatchResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Unsupported API version",
    content_type = "application/json",
    example = json!({
        "code": 1009,
        "error": "UNSUPPORTED_API_VERSION",
        "message": "Unsupported API version '3.0'"
    })
)]
pub struct UnsupportedApiVersionResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "code": 1004,
        "error": "NOT_FOUND",
        "message": "Product 42 not found"
    })
)]
pub struct NotFoundResponse(pub ErrorResponse);
