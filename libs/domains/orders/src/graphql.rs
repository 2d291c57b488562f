use async_graphql::{ComplexObject, Context, InputObject, Object, Result, SimpleObject};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use domain_customers::{CustomerService, graphql::CustomerObject};
use domain_products::{ProductService, graphql::ProductObject};

use crate::error::OrderError;
use crate::models::{CreateOrder, Order};
use crate::service::OrderService;

/// GraphQL representation of an order. Customer and products resolve
/// lazily through their own services.
#[derive(Debug, Clone, SimpleObject)]
#[graphql(complex, name = "Order")]
pub struct OrderObject {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub product_ids: Vec<Uuid>,
    pub order_date: DateTime<Utc>,
    pub total_amount: Decimal,
    pub created_at: DateTime<Utc>,
}

#[ComplexObject]
impl OrderObject {
    /// The customer who placed the order
    async fn customer(&self, ctx: &Context<'_>) -> Result<Option<CustomerObject>> {
        let service = ctx.data::<CustomerService>()?;
        let customer = service.get_customer(self.customer_id).await?;

        Ok(customer.map(Into::into))
    }

    /// The products on the order. Rows deleted since creation are omitted.
    async fn products(&self, ctx: &Context<'_>) -> Result<Vec<ProductObject>> {
        let service = ctx.data::<ProductService>()?;

        let mut products = Vec::with_capacity(self.product_ids.len());
        for product_id in &self.product_ids {
            if let Some(product) = service.get_product(*product_id).await? {
                products.push(product.into());
            }
        }

        Ok(products)
    }
}

impl From<Order> for OrderObject {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            customer_id: order.customer_id,
            product_ids: order.product_ids,
            order_date: order.order_date,
            total_amount: order.total_amount,
            created_at: order.created_at,
        }
    }
}

/// Input for creating an order
#[derive(Debug, Clone, InputObject)]
#[graphql(name = "OrderInput")]
pub struct OrderInput {
    pub customer_id: Uuid,
    pub product_ids: Vec<Uuid>,
    pub order_date: Option<DateTime<Utc>>,
}

impl From<OrderInput> for CreateOrder {
    fn from(input: OrderInput) -> Self {
        Self {
            customer_id: input.customer_id,
            product_ids: input.product_ids,
            order_date: input.order_date,
        }
    }
}

/// Payload for the createOrder mutation. `errors` is empty on success.
#[derive(Debug, SimpleObject)]
pub struct CreateOrderPayload {
    pub order: Option<OrderObject>,
    pub message: Option<String>,
    pub errors: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct OrderQuery;

#[Object]
impl OrderQuery {
    /// List all orders
    async fn orders(&self, ctx: &Context<'_>) -> Result<Vec<OrderObject>> {
        let service = ctx.data::<OrderService>()?;
        let orders = service.list_orders().await?;

        Ok(orders.into_iter().map(Into::into).collect())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct OrderMutation;

#[Object]
impl OrderMutation {
    /// Create an order. Referential failures land in the payload's error
    /// list; a store outage becomes a request error.
    async fn create_order(
        &self,
        ctx: &Context<'_>,
        input: OrderInput,
    ) -> Result<CreateOrderPayload> {
        let service = ctx.data::<OrderService>()?;

        match service.create_order(input.into()).await {
            Ok(order) => Ok(CreateOrderPayload {
                order: Some(order.into()),
                message: Some("Order created successfully".to_string()),
                errors: Vec::new(),
            }),
            Err(
                e @ (OrderError::CustomerNotFound(_)
                | OrderError::ProductsNotFound(_)
                | OrderError::EmptyProductList),
            ) => Ok(CreateOrderPayload {
                order: None,
                message: None,
                errors: vec![e.to_string()],
            }),
            Err(e) => Err(e.into()),
        }
    }
}
