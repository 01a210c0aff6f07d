//! In-memory product store.

use async_trait::async_trait;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use crate::error::{ProductError, ProductResult};
use crate::models::{Category, CreateProduct, Product, UpdateProduct};
use crate::repository::ProductRepository;
use crate::seed;

#[derive(Debug, Default)]
struct Store {
    products: BTreeMap<i64, Product>,
    categories: BTreeMap<i64, Category>,
    last_id: i64,
}

impl Store {
    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }
}

/// Thread-safe in-memory implementation of [`ProductRepository`].
///
/// Clones share the same underlying store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProductRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding only the given categories.
    pub fn with_categories(categories: Vec<Category>) -> Self {
        Self::from_parts(categories, Vec::new())
    }

    /// Store pre-populated with the demo catalog.
    pub fn seeded() -> Self {
        Self::from_parts(seed::categories(), seed::products())
    }

    /// Store with explicit categories and products. Products keep their ids
    /// and new ids continue after the highest one.
    pub fn from_parts(categories: Vec<Category>, products: Vec<Product>) -> Self {
        let last_id = products.iter().map(|p| p.id).max().unwrap_or(0);
        let store = Store {
            products: products.into_iter().map(|p| (p.id, p)).collect(),
            categories: categories.into_iter().map(|c| (c.id, c)).collect(),
            last_id,
        };

        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list_all(&self) -> ProductResult<Vec<Product>> {
        let store = self.store.read().await;
        Ok(store.products.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i64) -> ProductResult<Option<Product>> {
        let store = self.store.read().await;
        Ok(store.products.get(&id).cloned())
    }

    #[instrument(skip(self, input), fields(sku = %input.sku))]
    async fn add(&self, input: CreateProduct) -> ProductResult<Product> {
        let mut store = self.store.write().await;
        if !store.categories.contains_key(&input.category_id) {
            return Err(ProductError::UnknownCategory(input.category_id));
        }

        let id = store.next_id();
        let product = Product {
            id,
            name: input.name,
            sku: input.sku,
            price: input.price,
            is_available: input.is_available,
            category_id: input.category_id,
            version: 0,
        };
        store.products.insert(id, product.clone());
        debug!(id, "product stored");

        Ok(product)
    }

    #[instrument(skip(self, input))]
    async fn update(&self, id: i64, input: UpdateProduct) -> ProductResult<Product> {
        let mut store = self.store.write().await;
        if !store.categories.contains_key(&input.category_id) {
            return Err(ProductError::UnknownCategory(input.category_id));
        }

        let existing = store
            .products
            .get_mut(&id)
            .ok_or(ProductError::NotFound(id))?;

        if let Some(expected) = input.version {
            if expected != existing.version {
                return Err(ProductError::ConcurrencyConflict(id));
            }
        }

        existing.name = input.name;
        existing.sku = input.sku;
        existing.price = input.price;
        existing.is_available = input.is_available;
        existing.category_id = input.category_id;
        existing.version += 1;

        Ok(existing.clone())
    }

    #[instrument(skip(self))]
    async fn remove(&self, id: i64) -> ProductResult<Option<Product>> {
        let mut store = self.store.write().await;
        Ok(store.products.remove(&id))
    }

    #[instrument(skip(self))]
    async fn remove_many(&self, ids: Vec<i64>) -> ProductResult<Vec<Product>> {
        let mut store = self.store.write().await;

        let mut seen = BTreeSet::new();
        let unique: Vec<i64> = ids.into_iter().filter(|id| seen.insert(*id)).collect();

        if let Some(missing) = unique.iter().find(|id| !store.products.contains_key(*id)) {
            return Err(ProductError::NotFound(*missing));
        }

        Ok(unique
            .iter()
            .filter_map(|id| store.products.remove(id))
            .collect())
    }

    async fn category_exists(&self, id: i64) -> ProductResult<bool> {
        let store = self.store.read().await;
        Ok(store.categories.contains_key(&id))
    }

    async fn list_categories(&self) -> ProductResult<Vec<Category>> {
        let store = self.store.read().await;
        Ok(store.categories.values().cloned().collect())
    }
}
