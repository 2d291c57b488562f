use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    /// Owning customer
    pub customer_id: Uuid,
    /// Products on the order, in input order
    pub product_ids: Vec<Uuid>,
    /// When the order was placed
    pub order_date: DateTime<Utc>,
    /// Sum of product prices at creation time, never recomputed
    pub total_amount: Decimal,
    pub created_at: DateTime<Utc>,
}

/// Raw creation input as received from the API
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrder {
    pub customer_id: Uuid,
    pub product_ids: Vec<Uuid>,
    pub order_date: Option<DateTime<Utc>>,
}

/// Validated creation input with the total already computed
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub customer_id: Uuid,
    pub product_ids: Vec<Uuid>,
    pub order_date: DateTime<Utc>,
    pub total_amount: Decimal,
}

impl Order {
    pub fn new(input: NewOrder) -> Self {
        Self {
            id: Uuid::now_v7(),
            customer_id: input.customer_id,
            product_ids: input.product_ids,
            order_date: input.order_date,
            total_amount: input.total_amount,
            created_at: Utc::now(),
        }
    }
}
