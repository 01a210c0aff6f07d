//! Product Service - Business logic layer

use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{info, instrument};
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{
    CategoryWithProducts, CreateProduct, Product, ProductQueryParameters, UpdateProduct,
};
use crate::query::{self, ProductQuery};
use crate::repository::ProductRepository;

/// Product service providing business logic operations
///
/// Validates input, enforces identity and category rules, and shapes list
/// results through the query builder. Persistence concerns stay in the
/// repository.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Filtered, sorted and paginated listing.
    ///
    /// `available_only` restricts the result to available products before
    /// sorting and paging.
    #[instrument(skip(self, params))]
    pub async fn list_products(
        &self,
        params: ProductQueryParameters,
        available_only: bool,
    ) -> ProductResult<Vec<Product>> {
        params
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        let query = ProductQuery::from_parameters(&params).available_only(available_only);
        self.query(&query).await
    }

    /// Run an already resolved query against a fresh snapshot.
    #[instrument(skip(self, product_query))]
    pub async fn query(&self, product_query: &ProductQuery) -> ProductResult<Vec<Product>> {
        let snapshot = self.repository.list_all().await?;
        Ok(query::apply(snapshot, product_query))
    }

    /// Every available product, unpaginated.
    #[instrument(skip(self))]
    pub async fn list_available(&self) -> ProductResult<Vec<Product>> {
        self.query(&ProductQuery::new().available_only(true).unpaginated())
            .await
    }

    /// Get a product by ID
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: i64) -> ProductResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// Create a new product
    #[instrument(skip(self, input), fields(sku = %input.sku))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        self.ensure_category(input.category_id).await?;

        let product = self.repository.add(input).await?;
        info!(id = product.id, "product created");
        Ok(product)
    }

    /// Replace a product. The payload id must match `id`.
    #[instrument(skip(self, input))]
    pub async fn update_product(&self, id: i64, input: UpdateProduct) -> ProductResult<Product> {
        if input.id != id {
            return Err(ProductError::IdMismatch {
                path: id,
                body: input.id,
            });
        }

        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        self.ensure_category(input.category_id).await?;

        let product = self.repository.update(id, input).await?;
        info!(id, version = product.version, "product updated");
        Ok(product)
    }

    /// Delete a product, returning the removed record
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: i64) -> ProductResult<Product> {
        let removed = self
            .repository
            .remove(id)
            .await?
            .ok_or(ProductError::NotFound(id))?;
        info!(id, "product deleted");
        Ok(removed)
    }

    /// Delete several products at once. Any missing id aborts the whole batch.
    #[instrument(skip(self))]
    pub async fn delete_products(&self, ids: Vec<i64>) -> ProductResult<Vec<Product>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let removed = self.repository.remove_many(ids).await?;
        info!(count = removed.len(), "products deleted");
        Ok(removed)
    }

    /// Categories with their products, both in id order.
    #[instrument(skip(self))]
    pub async fn list_categories(&self) -> ProductResult<Vec<CategoryWithProducts>> {
        let categories = self.repository.list_categories().await?;
        let mut by_category: BTreeMap<i64, Vec<Product>> = BTreeMap::new();
        for product in self.repository.list_all().await? {
            by_category
                .entry(product.category_id)
                .or_default()
                .push(product);
        }

        Ok(categories
            .into_iter()
            .map(|category| CategoryWithProducts {
                products: by_category.remove(&category.id).unwrap_or_default(),
                id: category.id,
                name: category.name,
            })
            .collect())
    }

    /// Readiness probe: the store answers a read.
    pub async fn ping(&self) -> ProductResult<()> {
        self.repository.list_categories().await.map(|_| ())
    }

    async fn ensure_category(&self, category_id: i64) -> ProductResult<()> {
        if self.repository.category_exists(category_id).await? {
            Ok(())
        } else {
            Err(ProductError::UnknownCategory(category_id))
        }
    }
}
