use domain_products::{InMemoryProductRepository, ProductService};

use crate::config::Config;

/// Shared application state.
///
/// The repository is cheap to clone; every clone sees the same store.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub repository: InMemoryProductRepository,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let repository = if config.seed_database {
            InMemoryProductRepository::seeded()
        } else {
            InMemoryProductRepository::with_categories(domain_products::seed::categories())
        };

        Self { config, repository }
    }

    pub fn product_service(&self) -> ProductService<InMemoryProductRepository> {
        ProductService::new(self.repository.clone())
    }
}
