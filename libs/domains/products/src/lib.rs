//! Products Domain
//!
//! Domain implementation for CRM products: creation with price and stock
//! validation, and listing. Prices are exact decimals, never floats.

pub mod entity;
pub mod error;
pub mod graphql;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{ProductError, ProductResult};
pub use graphql::{ProductMutation, ProductQuery};
pub use models::{CreateProduct, NewProduct, Product, validate_price, validate_stock};
pub use postgres::PgProductRepository;
pub use repository::{InMemoryProductRepository, ProductRepository};
pub use service::ProductService;
