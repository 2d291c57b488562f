use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum OrderError {
    #[error("Customer with id '{0}' not found")]
    CustomerNotFound(Uuid),

    #[error("Products not found: {}", format_ids(.0))]
    ProductsNotFound(Vec<Uuid>),

    #[error("Order must reference at least one product")]
    EmptyProductList,

    #[error("Database error: {0}")]
    Database(String),
}

fn format_ids(ids: &[Uuid]) -> String {
    ids.iter()
        .map(Uuid::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

pub type OrderResult<T> = Result<T, OrderError>;

// Failures from the referenced domains are store-level by the time they
// reach this crate; validation happened on their side.
impl From<domain_customers::CustomerError> for OrderError {
    fn from(e: domain_customers::CustomerError) -> Self {
        match e {
            domain_customers::CustomerError::Database(msg) => OrderError::Database(msg),
            other => OrderError::Database(other.to_string()),
        }
    }
}

impl From<domain_products::ProductError> for OrderError {
    fn from(e: domain_products::ProductError) -> Self {
        match e {
            domain_products::ProductError::Database(msg) => OrderError::Database(msg),
            other => OrderError::Database(other.to_string()),
        }
    }
}
