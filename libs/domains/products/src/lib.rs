//! Products Domain
//!
//! Product catalog backed by an in-memory store, with query shaping,
//! category integrity and versioned HTTP endpoints.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, API version negotiation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, identity rules, query shaping
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + in-memory implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_products::{handlers, InMemoryProductRepository, ProductService};
//!
//! let repository = InMemoryProductRepository::seeded();
//! let service = ProductService::new(repository);
//!
//! // Mount under /api/products
//! let router = handlers::router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod memory;
pub mod models;
pub mod query;
pub mod repository;
pub mod seed;
pub mod service;
pub mod versioning;

// Re-export commonly used types
pub use error::{ProductError, ProductResult};
pub use handlers::{ApiDoc, CategoriesApiDoc};
pub use memory::InMemoryProductRepository;
pub use models::{
    BulkDeleteQuery, Category, CategoryWithProducts, CreateProduct, Product,
    ProductQueryParameters, UpdateProduct,
};
pub use query::{ProductQuery, SortField, SortOrder};
pub use repository::ProductRepository;
pub use service::ProductService;
pub use versioning::{ApiVersion, VersionPolicy};
