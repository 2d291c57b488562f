use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductError {
    /// One or more validation failures, accumulated so the caller sees
    /// every problem at once
    #[error("Invalid input: {}", .0.join("; "))]
    Invalid(Vec<String>),

    #[error("Database error: {0}")]
    Database(String),
}

pub type ProductResult<T> = Result<T, ProductError>;
