//! CRM GraphQL API
//!
//! Wires the customer, product and order domains into one executable
//! GraphQL schema served over axum.

pub mod config;
pub mod schema;

pub use config::Config;
pub use schema::{CrmSchema, MutationRoot, QueryRoot, build_schema};
