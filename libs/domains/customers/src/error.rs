use thiserror::Error;

#[derive(Debug, Error)]
pub enum CustomerError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Customer with email '{0}' already exists")]
    DuplicateEmail(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type CustomerResult<T> = Result<T, CustomerError>;
