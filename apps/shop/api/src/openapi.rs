use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "Shop API",
        version = "0.1.0",
        description = "Product catalog with filtering, sorting, pagination and API versioning"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = "/products", api = domain_products::ApiDoc),
        (path = "/categories", api = domain_products::CategoriesApiDoc)
    )
)]
pub struct ApiDoc;
