use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Catalog item.
///
/// `version` is bumped by the store on every successful update and backs the
/// optimistic concurrency check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub sku: String,
    pub price: f64,
    pub is_available: bool,
    pub category_id: i64,
    #[serde(default)]
    pub version: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// Category together with the products that reference it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryWithProducts {
    pub id: i64,
    pub name: String,
    pub products: Vec<Product>,
}

fn default_available() -> bool {
    true
}

/// DTO for creating a product. The id is assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProduct {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1, max = 50))]
    pub sku: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[serde(default = "default_available")]
    pub is_available: bool,
    pub category_id: i64,
}

/// DTO for replacing a product.
///
/// `id` must equal the id in the request path. When `version` is present the
/// update only succeeds if the stored record still has that version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProduct {
    pub id: i64,
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1, max = 50))]
    pub sku: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    pub is_available: bool,
    pub category_id: i64,
    #[serde(default)]
    pub version: Option<u64>,
}

/// Query string accepted by the list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, IntoParams, Validate)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ProductQueryParameters {
    /// Inclusive lower price bound
    pub min_price: Option<f64>,
    /// Inclusive upper price bound
    pub max_price: Option<f64>,
    /// Case-insensitive substring matched against name or SKU
    pub search_term: Option<String>,
    /// Case-insensitive exact SKU
    pub sku: Option<String>,
    /// Case-insensitive substring of the name
    pub name: Option<String>,
    /// Property to sort by (id, name, sku, price, isAvailable, categoryId)
    pub sort_by: Option<String>,
    /// `asc` (default) or `desc`
    pub sort_order: Option<String>,
    /// 1-based page number (default 1)
    #[validate(range(min = 1))]
    pub page: Option<i64>,
    /// Page size (default 50, capped at 100)
    #[validate(range(min = 1))]
    pub size: Option<i64>,
}

/// Query string for bulk delete: `?ids=1&ids=2`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, IntoParams, Validate)]
#[into_params(parameter_in = Query)]
pub struct BulkDeleteQuery {
    #[serde(default)]
    pub ids: Vec<i64>,
}
