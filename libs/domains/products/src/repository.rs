use async_trait::async_trait;

use crate::error::ProductResult;
use crate::models::{Category, CreateProduct, Product, UpdateProduct};

/// Repository trait for Product persistence
///
/// Query shaping happens above this layer, so a store only needs to hand out
/// consistent snapshots and enforce identity and version rules.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Snapshot of every product in id order
    async fn list_all(&self) -> ProductResult<Vec<Product>>;

    /// Get a product by ID
    async fn get_by_id(&self, id: i64) -> ProductResult<Option<Product>>;

    /// Insert a product under a freshly assigned, never reused id
    async fn add(&self, input: CreateProduct) -> ProductResult<Product>;

    /// Replace a product.
    ///
    /// Fails with `NotFound` if the record is gone and `ConcurrencyConflict`
    /// if `input.version` is set and no longer matches.
    async fn update(&self, id: i64, input: UpdateProduct) -> ProductResult<Product>;

    /// Remove a product, returning it if it existed
    async fn remove(&self, id: i64) -> ProductResult<Option<Product>>;

    /// Remove every listed product or none of them.
    ///
    /// Fails with `NotFound` for the first missing id before anything is removed.
    async fn remove_many(&self, ids: Vec<i64>) -> ProductResult<Vec<Product>>;

    async fn category_exists(&self, id: i64) -> ProductResult<bool>;

    async fn list_categories(&self) -> ProductResult<Vec<Category>>;
}
