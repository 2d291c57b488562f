use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Parse a price string into an exact decimal and require it to be
/// strictly positive.
pub fn validate_price(input: &str) -> Result<Decimal, String> {
    let Ok(price) = Decimal::from_str(input.trim()) else {
        return Err(format!("Price must be a valid decimal number, got '{}'", input));
    };

    if price <= Decimal::ZERO {
        return Err("Price must be positive".to_string());
    }

    Ok(price)
}

/// Require stock to be non-negative.
pub fn validate_stock(stock: i32) -> Result<(), String> {
    if stock < 0 {
        Err("Stock cannot be negative".to_string())
    } else {
        Ok(())
    }
}

/// Product entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    /// Unit price, exact decimal
    pub price: Decimal,
    /// Units on hand
    pub stock: i32,
    pub created_at: DateTime<Utc>,
}

/// Raw creation input as received from the API, price still unparsed
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProduct {
    pub name: String,
    pub price: String,
    pub stock: Option<i32>,
}

/// Validated creation input, ready for persistence
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub price: Decimal,
    pub stock: i32,
}

impl Product {
    pub fn new(input: NewProduct) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: input.name,
            price: input.price,
            stock: input.stock,
            created_at: Utc::now(),
        }
    }
}
