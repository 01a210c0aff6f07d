//! HTTP handlers for Products API

use axum::{
    Extension, Json, Router,
    extract::{OriginalUri, State},
    http::{StatusCode, header},
    middleware,
    response::IntoResponse,
    routing::{delete, get},
};
use axum_helpers::{
    IdPath, ValidatedJson, ValidatedQuery,
    errors::responses::{
        BadRequestIdResponse, BadRequestValidationResponse, IdMismatchResponse,
        InternalServerErrorResponse, NotFoundResponse, UnsupportedApiVersionResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ProductResult;
use crate::models::{
    BulkDeleteQuery, Category, CategoryWithProducts, CreateProduct, Product,
    ProductQueryParameters, UpdateProduct,
};
use crate::repository::ProductRepository;
use crate::service::ProductService;
use crate::versioning::{ApiVersion, VersionPolicy, api_versioning};

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        list_available_products,
        create_product,
        get_product,
        update_product,
        delete_product,
        delete_products,
    ),
    components(
        schemas(Product, CreateProduct, UpdateProduct),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            IdMismatchResponse,
            UnsupportedApiVersionResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Products", description = "Product catalog endpoints")
    )
)]
pub struct ApiDoc;

/// OpenAPI documentation for Categories API
#[derive(OpenApi)]
#[openapi(
    paths(list_categories),
    components(schemas(Category, CategoryWithProducts)),
    tags(
        (name = "Categories", description = "Product categories")
    )
)]
pub struct CategoriesApiDoc;

/// Create the versioned products router
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/available", get(list_available_products))
        .route("/delete", delete(delete_products))
        .route(
            "/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .layer(middleware::from_fn(api_versioning))
        .with_state(shared_service)
}

/// Products router pinned to v1 regardless of what the request asks for
pub fn minimal_router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    router(service).layer(Extension(VersionPolicy::Fixed(ApiVersion::V1)))
}

/// Create the categories router
pub fn categories_router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    Router::new()
        .route("/", get(list_categories))
        .with_state(Arc::new(service))
}

/// List products with optional filters
///
/// v1 returns every match; v2 only available products.
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    params(ProductQueryParameters),
    responses(
        (status = 200, description = "List of products", body = Vec<Product>),
        (status = 400, response = UnsupportedApiVersionResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Extension(version): Extension<ApiVersion>,
    ValidatedQuery(params): ValidatedQuery<ProductQueryParameters>,
) -> ProductResult<Json<Vec<Product>>> {
    let products = service
        .list_products(params, version.available_only())
        .await?;
    Ok(Json(products))
}

/// List every available product
#[utoipa::path(
    get,
    path = "/available",
    tag = "Products",
    responses(
        (status = 200, description = "Available products", body = Vec<Product>)
    )
)]
async fn list_available_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<Json<Vec<Product>>> {
    let products = service.list_available().await?;
    Ok(Json(products))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created", body = Product,
            headers(("Location" = String, description = "URL of the new product"))),
        (status = 400, response = BadRequestValidationResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    OriginalUri(uri): OriginalUri,
    ValidatedJson(input): ValidatedJson<CreateProduct>,
) -> ProductResult<impl IntoResponse> {
    let product = service.create_product(input).await?;
    let location = format!("{}/{}", uri.path().trim_end_matches('/'), product.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(product),
    ))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    IdPath(id): IdPath,
) -> ProductResult<Json<Product>> {
    let product = service.get_product(id).await?;
    Ok(Json(product))
}

/// Replace a product
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    request_body = UpdateProduct,
    responses(
        (status = 204, description = "Product updated"),
        (status = 400, response = IdMismatchResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<UpdateProduct>,
) -> ProductResult<StatusCode> {
    service.update_product(id, input).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Deleted product", body = Product),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    IdPath(id): IdPath,
) -> ProductResult<Json<Product>> {
    let product = service.delete_product(id).await?;
    Ok(Json(product))
}

/// Delete several products; nothing is removed if any id is missing
#[utoipa::path(
    delete,
    path = "/delete",
    tag = "Products",
    params(BulkDeleteQuery),
    responses(
        (status = 200, description = "Deleted products", body = Vec<Product>),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn delete_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedQuery(query): ValidatedQuery<BulkDeleteQuery>,
) -> ProductResult<Json<Vec<Product>>> {
    let products = service.delete_products(query.ids).await?;
    Ok(Json(products))
}

/// List categories with their products
#[utoipa::path(
    get,
    path = "",
    tag = "Categories",
    responses(
        (status = 200, description = "Categories", body = Vec<CategoryWithProducts>)
    )
)]
async fn list_categories<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<Json<Vec<CategoryWithProducts>>> {
    let categories = service.list_categories().await?;
    Ok(Json(categories))
}
