use chrono::Utc;
use rust_decimal::Decimal;
use std::sync::Arc;

use domain_customers::CustomerRepository;
use domain_products::ProductRepository;

use crate::error::{OrderError, OrderResult};
use crate::models::{CreateOrder, NewOrder, Order};
use crate::repository::OrderRepository;

/// Service layer for order operations.
///
/// Holds repositories for the referenced domains so referential checks
/// and price resolution run against the same store as the write.
#[derive(Clone)]
pub struct OrderService {
    orders: Arc<dyn OrderRepository>,
    customers: Arc<dyn CustomerRepository>,
    products: Arc<dyn ProductRepository>,
}

impl OrderService {
    pub fn new(
        orders: Arc<dyn OrderRepository>,
        customers: Arc<dyn CustomerRepository>,
        products: Arc<dyn ProductRepository>,
    ) -> Self {
        Self {
            orders,
            customers,
            products,
        }
    }

    /// Create an order after resolving its references.
    ///
    /// The customer must exist, the product list must be non-empty, and
    /// every product must exist. Missing products are collected so the
    /// caller sees all of them, then the order aborts without persisting.
    /// The total is the exact decimal sum of the resolved prices.
    pub async fn create_order(&self, input: CreateOrder) -> OrderResult<Order> {
        let customer = self.customers.get_by_id(input.customer_id).await?;
        if customer.is_none() {
            return Err(OrderError::CustomerNotFound(input.customer_id));
        }

        if input.product_ids.is_empty() {
            return Err(OrderError::EmptyProductList);
        }

        let mut missing = Vec::new();
        let mut total = Decimal::ZERO;
        for product_id in &input.product_ids {
            match self.products.get_by_id(*product_id).await? {
                Some(product) => total += product.price,
                None => missing.push(*product_id),
            }
        }

        if !missing.is_empty() {
            return Err(OrderError::ProductsNotFound(missing));
        }

        self.orders
            .create(NewOrder {
                customer_id: input.customer_id,
                product_ids: input.product_ids,
                order_date: input.order_date.unwrap_or_else(Utc::now),
                total_amount: total,
            })
            .await
    }

    pub async fn get_order(&self, id: uuid::Uuid) -> OrderResult<Option<Order>> {
        self.orders.get_by_id(id).await
    }

    pub async fn list_orders(&self) -> OrderResult<Vec<Order>> {
        self.orders.list().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryOrderRepository;
    use domain_customers::{CreateCustomer, CustomerService, InMemoryCustomerRepository};
    use domain_products::{InMemoryProductRepository, NewProduct};
    use std::str::FromStr;
    use uuid::Uuid;

    struct Fixture {
        orders: OrderService,
        customers: CustomerService,
        products: Arc<InMemoryProductRepository>,
    }

    fn fixture() -> Fixture {
        let customer_repo = Arc::new(InMemoryCustomerRepository::new());
        let product_repo = Arc::new(InMemoryProductRepository::new());

        Fixture {
            orders: OrderService::new(
                Arc::new(InMemoryOrderRepository::new()),
                customer_repo.clone(),
                product_repo.clone(),
            ),
            customers: CustomerService::new(customer_repo),
            products: product_repo,
        }
    }

    async fn seed_customer(fx: &Fixture) -> Uuid {
        fx.customers
            .create_customer(CreateCustomer {
                name: "Alice".to_string(),
                email: "alice@example.com".to_string(),
                phone: None,
            })
            .await
            .unwrap()
            .id
    }

    async fn seed_product(fx: &Fixture, price: &str) -> Uuid {
        fx.products
            .create(NewProduct {
                name: format!("Product at {}", price),
                price: Decimal::from_str(price).unwrap(),
                stock: 10,
            })
            .await
            .unwrap()
            .id
    }

    #[tokio::test]
    async fn test_create_order_computes_exact_total() {
        let fx = fixture();
        let customer_id = seed_customer(&fx).await;
        let p1 = seed_product(&fx, "9.99").await;
        let p2 = seed_product(&fx, "4.76").await;

        let order = fx
            .orders
            .create_order(CreateOrder {
                customer_id,
                product_ids: vec![p1, p2],
                order_date: None,
            })
            .await
            .unwrap();

        assert_eq!(order.total_amount, Decimal::from_str("14.75").unwrap());
        assert_eq!(order.product_ids, vec![p1, p2]);
    }

    #[tokio::test]
    async fn test_create_order_unknown_customer() {
        let fx = fixture();
        let bogus = Uuid::now_v7();

        let result = fx
            .orders
            .create_order(CreateOrder {
                customer_id: bogus,
                product_ids: vec![Uuid::now_v7()],
                order_date: None,
            })
            .await;

        assert!(matches!(result, Err(OrderError::CustomerNotFound(id)) if id == bogus));
    }

    #[tokio::test]
    async fn test_create_order_empty_product_list() {
        let fx = fixture();
        let customer_id = seed_customer(&fx).await;

        let result = fx
            .orders
            .create_order(CreateOrder {
                customer_id,
                product_ids: vec![],
                order_date: None,
            })
            .await;

        assert!(matches!(result, Err(OrderError::EmptyProductList)));
    }

    #[tokio::test]
    async fn test_create_order_collects_all_missing_products() {
        let fx = fixture();
        let customer_id = seed_customer(&fx).await;
        let existing = seed_product(&fx, "5.00").await;
        let ghost_a = Uuid::now_v7();
        let ghost_b = Uuid::now_v7();

        let result = fx
            .orders
            .create_order(CreateOrder {
                customer_id,
                product_ids: vec![existing, ghost_a, ghost_b],
                order_date: None,
            })
            .await;

        let Err(OrderError::ProductsNotFound(missing)) = result else {
            panic!("expected missing product failure");
        };
        assert_eq!(missing, vec![ghost_a, ghost_b]);

        // Nothing was persisted
        assert!(fx.orders.list_orders().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_order_uses_supplied_date() {
        let fx = fixture();
        let customer_id = seed_customer(&fx).await;
        let product_id = seed_product(&fx, "1.00").await;

        let when = chrono::DateTime::parse_from_rfc3339("2024-06-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc);

        let order = fx
            .orders
            .create_order(CreateOrder {
                customer_id,
                product_ids: vec![product_id],
                order_date: Some(when),
            })
            .await
            .unwrap();

        assert_eq!(order.order_date, when);
    }
}
