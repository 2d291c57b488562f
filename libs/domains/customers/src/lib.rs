//! Customers Domain
//!
//! Domain implementation for CRM customers: creation (single and bulk with
//! per-row error reporting), listing, and email/phone validation.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   GraphQL   │  ← Query/Mutation objects, payload types
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business logic, validation, duplicate detection
//! └──────┬──────┘
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + implementations)
//! └──────┬──────┘
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs, validation rules
//! └─────────────┘
//! ```

pub mod entity;
pub mod error;
pub mod graphql;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{CustomerError, CustomerResult};
pub use graphql::{CustomerMutation, CustomerQuery};
pub use models::{CreateCustomer, Customer, validate_email, validate_phone};
pub use postgres::PgCustomerRepository;
pub use repository::{CustomerRepository, InMemoryCustomerRepository};
pub use service::{BulkCreateReport, CustomerService};
