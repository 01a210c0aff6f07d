//! Handler tests for Products domain
//!
//! Drive the products routers over an in-memory store:
//! - status codes and error bodies
//! - version negotiation and the pinned minimal surface
//! - query shaping through the query string

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use domain_products::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use test_utils::TestDataBuilder;
use test_utils::assertions::{assert_ids_eq, assert_sorted_by};
use tower::ServiceExt; // For oneshot()

const FIXTURE_SIZE: i64 = 25;

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn fixture_products(builder: &TestDataBuilder) -> Vec<Product> {
    (1..=FIXTURE_SIZE)
        .map(|id| Product {
            id,
            name: builder.name("product", &id.to_string()),
            sku: builder.sku(id as u32),
            price: builder.price(id as u32),
            // every fifth product is unavailable
            is_available: id % 5 != 0,
            category_id: if id <= 12 { 1 } else { 2 },
            version: 0,
        })
        .collect()
}

fn fixture_categories() -> Vec<Category> {
    vec![
        Category {
            id: 1,
            name: "Active Wear - Men".into(),
        },
        Category {
            id: 2,
            name: "Active Wear - Women".into(),
        },
    ]
}

fn app(test_name: &str) -> (Router, InMemoryProductRepository) {
    let builder = TestDataBuilder::from_test_name(test_name);
    let repository =
        InMemoryProductRepository::from_parts(fixture_categories(), fixture_products(&builder));
    let service = ProductService::new(repository.clone());

    let router = Router::new()
        .nest("/api/products", handlers::router(service.clone()))
        .nest("/api/categories", handlers::categories_router(service.clone()))
        .nest("/products", handlers::minimal_router(service));

    (router, repository)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn ids(products: &[Product]) -> Vec<i64> {
    products.iter().map(|p| p.id).collect()
}

#[tokio::test]
async fn test_v1_list_includes_unavailable_products() {
    let (app, _) = app("v1_list");

    let response = app.oneshot(get("/api/products")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["api-supported-versions"], "1.0, 2.0");

    let products: Vec<Product> = json_body(response.into_body()).await;
    assert_eq!(products.len(), FIXTURE_SIZE as usize);
}

#[tokio::test]
async fn test_v2_list_only_returns_available_products() {
    let (app, _) = app("v2_list");

    let request = Request::builder()
        .uri("/api/products")
        .header("x-api-version", "2.0")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let products: Vec<Product> = json_body(response.into_body()).await;
    assert_eq!(products.len(), 20);
    assert!(products.iter().all(|p| p.is_available));

    let request = Request::builder()
        .uri("/api/products")
        .header("accept", "application/json; ver=2")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let products: Vec<Product> = json_body(response.into_body()).await;
    assert_eq!(products.len(), 20);
}

#[tokio::test]
async fn test_percent_encoded_query_version_selects_v2() {
    let (app, _) = app("encoded_version");

    let response = app
        .oneshot(get("/api/products?api-version=2%2E0"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let products: Vec<Product> = json_body(response.into_body()).await;
    assert_eq!(products.len(), 20);
    assert!(products.iter().all(|p| p.is_available));
}

#[tokio::test]
async fn test_conflicting_versions_are_rejected() {
    let (app, _) = app("version_conflict");

    let request = Request::builder()
        .uri("/api/products?api-version=1.0")
        .header("x-api-version", "2.0")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response.headers()["api-supported-versions"], "1.0, 2.0");
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "UNSUPPORTED_API_VERSION");
}

#[tokio::test]
async fn test_unknown_version_is_rejected() {
    let (app, _) = app("version_unknown");

    let response = app
        .oneshot(get("/api/products?api-version=3.0"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_minimal_surface_is_pinned_to_v1() {
    let (app, _) = app("minimal_v1");

    let response = app
        .oneshot(get("/products?api-version=2.0"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let products: Vec<Product> = json_body(response.into_body()).await;
    assert_eq!(products.len(), FIXTURE_SIZE as usize);
}

#[tokio::test]
async fn test_available_endpoint_is_unpaginated() {
    let (app, _) = app("available");

    let response = app
        .oneshot(get("/api/products/available?size=1"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let products: Vec<Product> = json_body(response.into_body()).await;
    assert_eq!(products.len(), 20);
}

#[tokio::test]
async fn test_second_page_of_ten() {
    let (app, _) = app("pagination");

    let response = app
        .oneshot(get("/api/products?page=2&size=10"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let products: Vec<Product> = json_body(response.into_body()).await;
    assert_ids_eq(
        &ids(&products),
        &(11..=20).collect::<Vec<_>>(),
        "page 2 of size 10",
    );
}

#[tokio::test]
async fn test_non_positive_page_is_bad_request() {
    let (app, _) = app("page_zero");

    let response = app.oneshot(get("/api/products?page=0")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_price_bounds_and_sorting() {
    let (app, _) = app("price_sort");

    let response = app
        .oneshot(get(
            "/api/products?minPrice=20&maxPrice=150&sortBy=price&sortOrder=DESC",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let products: Vec<Product> = json_body(response.into_body()).await;
    assert!(products.iter().all(|p| (20.0..=150.0).contains(&p.price)));
    assert_sorted_by(&products, |p| p.price, true, "price desc");
}

#[tokio::test]
async fn test_invalid_sort_field_keeps_id_order() {
    let (app, _) = app("bad_sort");

    let response = app
        .oneshot(get("/api/products?sortBy=colour&sortOrder=desc"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let products: Vec<Product> = json_body(response.into_body()).await;
    assert_ids_eq(
        &ids(&products),
        &(1..=FIXTURE_SIZE).collect::<Vec<_>>(),
        "unsorted",
    );
}

#[tokio::test]
async fn test_sku_filter_is_case_insensitive_exact() {
    let builder = TestDataBuilder::from_test_name("sku_filter");
    let (app, _) = app("sku_filter");
    let sku = builder.sku(7).to_lowercase();

    let response = app
        .oneshot(get(&format!("/api/products?sku={}", sku)))
        .await
        .unwrap();

    let products: Vec<Product> = json_body(response.into_body()).await;
    assert_ids_eq(&ids(&products), &[7], "sku match");
}

#[tokio::test]
async fn test_get_product_by_id() {
    let (app, _) = app("get_one");

    let response = app.clone().oneshot(get("/api/products/3")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let product: Product = json_body(response.into_body()).await;
    assert_eq!(product.id, 3);

    let response = app.clone().oneshot(get("/api/products/999")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.oneshot(get("/api/products/abc")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "INVALID_ID");
}

#[tokio::test]
async fn test_create_returns_201_with_location() {
    let (app, _) = app("create");

    let request = json_request(
        "POST",
        "/api/products",
        json!({
            "name": "Stretchy Dance Pants",
            "sku": "AWWSDP",
            "price": 55.0,
            "isAvailable": true,
            "categoryId": 2
        }),
    );
    let response = app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let location = response.headers()[header::LOCATION]
        .to_str()
        .unwrap()
        .to_string();
    let created: Product = json_body(response.into_body()).await;
    assert_eq!(created.id, FIXTURE_SIZE + 1);
    assert_eq!(location, format!("/api/products/{}", created.id));

    let response = app.oneshot(get(&location)).await.unwrap();
    let fetched: Product = json_body(response.into_body()).await;
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_create_with_unknown_category_is_bad_request() {
    let (app, _) = app("create_unknown_category");

    let request = json_request(
        "POST",
        "/api/products",
        json!({ "name": "Ghost", "sku": "GH1", "price": 1.0, "categoryId": 42 }),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "UNKNOWN_REFERENCE");
}

#[tokio::test]
async fn test_create_validates_input() {
    let (app, _) = app("create_invalid");

    let request = json_request(
        "POST",
        "/api/products",
        json!({ "name": "", "sku": "X", "price": -3.0, "categoryId": 1 }),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "VALIDATION_ERROR");
    assert!(body["details"]["price"].is_array());
}

#[tokio::test]
async fn test_update_with_mismatched_id_does_not_mutate() {
    let (app, repository) = app("update_mismatch");
    let before = repository.get_by_id(5).await.unwrap();

    let request = json_request(
        "PUT",
        "/api/products/5",
        json!({
            "id": 7,
            "name": "Renamed",
            "sku": "RN1",
            "price": 1.0,
            "isAvailable": true,
            "categoryId": 1
        }),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "ID_MISMATCH");
    assert_eq!(repository.get_by_id(5).await.unwrap(), before);
    assert_eq!(repository.get_by_id(7).await.unwrap().unwrap().version, 0);
}

#[tokio::test]
async fn test_update_returns_204_and_persists() {
    let (app, repository) = app("update_ok");

    let request = json_request(
        "PUT",
        "/api/products/4",
        json!({
            "id": 4,
            "name": "Renamed",
            "sku": "RN4",
            "price": 12.5,
            "isAvailable": false,
            "categoryId": 2,
            "version": 0
        }),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let stored = repository.get_by_id(4).await.unwrap().unwrap();
    assert_eq!(stored.name, "Renamed");
    assert_eq!(stored.category_id, 2);
    assert_eq!(stored.version, 1);
}

#[tokio::test]
async fn test_stale_update_is_a_server_error() {
    let (app, _) = app("update_stale");

    let request = json_request(
        "PUT",
        "/api/products/4",
        json!({
            "id": 4,
            "name": "Renamed",
            "sku": "RN4",
            "price": 12.5,
            "isAvailable": true,
            "categoryId": 1,
            "version": 3
        }),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "CONCURRENCY_CONFLICT");
}

#[tokio::test]
async fn test_update_missing_product_is_not_found() {
    let (app, _) = app("update_missing");

    let request = json_request(
        "PUT",
        "/api/products/404",
        json!({
            "id": 404,
            "name": "Nobody",
            "sku": "NB1",
            "price": 1.0,
            "isAvailable": true,
            "categoryId": 1
        }),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_returns_removed_product() {
    let (app, repository) = app("delete_one");

    let request = Request::builder()
        .method("DELETE")
        .uri("/api/products/2")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let removed: Product = json_body(response.into_body()).await;
    assert_eq!(removed.id, 2);
    assert!(repository.get_by_id(2).await.unwrap().is_none());

    let request = Request::builder()
        .method("DELETE")
        .uri("/api/products/2")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_bulk_delete_with_missing_id_removes_nothing() {
    let (app, repository) = app("bulk_missing");

    let request = Request::builder()
        .method("DELETE")
        .uri("/api/products/delete?ids=1&ids=999&ids=2")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        repository.list_all().await.unwrap().len(),
        FIXTURE_SIZE as usize
    );
}

#[tokio::test]
async fn test_bulk_delete_returns_removed_set() {
    let (app, repository) = app("bulk_ok");

    let request = Request::builder()
        .method("DELETE")
        .uri("/api/products/delete?ids=3&ids=1")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let removed: Vec<Product> = json_body(response.into_body()).await;
    assert_ids_eq(&ids(&removed), &[3, 1], "removed set");
    assert!(repository.get_by_id(1).await.unwrap().is_none());
    assert!(repository.get_by_id(3).await.unwrap().is_none());
}

#[tokio::test]
async fn test_categories_include_their_products() {
    let (app, _) = app("categories");

    let response = app.oneshot(get("/api/categories")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let categories: Vec<CategoryWithProducts> = json_body(response.into_body()).await;
    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0].products.len(), 12);
    assert_eq!(categories[1].products.len(), 13);
}
