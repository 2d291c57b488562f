//! Orders Domain
//!
//! Domain implementation for CRM orders: creation with referential checks
//! against customers and products, total computation from exact product
//! prices, and listing. Order rows and their product associations are
//! written in one transaction.

pub mod entity;
pub mod error;
pub mod graphql;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{OrderError, OrderResult};
pub use graphql::{OrderMutation, OrderQuery};
pub use models::{CreateOrder, NewOrder, Order};
pub use postgres::PgOrderRepository;
pub use repository::{InMemoryOrderRepository, OrderRepository};
pub use service::OrderService;
