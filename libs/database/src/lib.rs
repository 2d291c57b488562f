//! Database library providing the PostgreSQL connector for the CRM backend.
//!
//! The domain crates own their entities and repositories; this library only
//! manages connections: configuration, pooling, retry and health checks.
//!
//! # Example
//!
//! ```ignore
//! use core_config::FromEnv;
//! use database::postgres::{self, PostgresConfig};
//!
//! let config = PostgresConfig::from_env()?;
//! let db = postgres::connect_from_config(config).await?;
//! ```

pub mod common;
pub mod postgres;

pub use common::{DatabaseError, DatabaseResult};
