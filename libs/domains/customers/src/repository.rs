use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{CustomerError, CustomerResult};
use crate::models::{CreateCustomer, Customer};

/// Repository trait for Customer persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Create a single customer
    async fn create(&self, input: CreateCustomer) -> CustomerResult<Customer>;

    /// Create a batch of customers in one atomic transaction.
    ///
    /// Either every row is committed or none is; a constraint violation
    /// rolls back the whole batch.
    async fn create_many(&self, inputs: Vec<CreateCustomer>) -> CustomerResult<Vec<Customer>>;

    /// Get a customer by ID
    async fn get_by_id(&self, id: Uuid) -> CustomerResult<Option<Customer>>;

    /// List all customers
    async fn list(&self) -> CustomerResult<Vec<Customer>>;

    /// Check if an email already exists (case-insensitive)
    async fn email_exists(&self, email: &str) -> CustomerResult<bool>;
}

/// In-memory implementation of CustomerRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryCustomerRepository {
    customers: Arc<RwLock<HashMap<Uuid, Customer>>>,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self {
            customers: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn create(&self, input: CreateCustomer) -> CustomerResult<Customer> {
        let mut customers = self.customers.write().await;

        // Simulates the unique constraint on email
        let email_exists = customers
            .values()
            .any(|c| c.email.eq_ignore_ascii_case(&input.email));

        if email_exists {
            return Err(CustomerError::DuplicateEmail(input.email));
        }

        let customer = Customer::new(input);
        customers.insert(customer.id, customer.clone());

        tracing::info!(customer_id = %customer.id, email = %customer.email, "Created customer");
        Ok(customer)
    }

    async fn create_many(&self, inputs: Vec<CreateCustomer>) -> CustomerResult<Vec<Customer>> {
        let mut customers = self.customers.write().await;

        // All-or-nothing: reject the whole batch before touching the map
        for input in &inputs {
            let conflict = customers
                .values()
                .any(|c| c.email.eq_ignore_ascii_case(&input.email));

            if conflict {
                return Err(CustomerError::DuplicateEmail(input.email.clone()));
            }
        }

        let created: Vec<Customer> = inputs.into_iter().map(Customer::new).collect();
        for customer in &created {
            customers.insert(customer.id, customer.clone());
        }

        tracing::info!(count = created.len(), "Created customer batch");
        Ok(created)
    }

    async fn get_by_id(&self, id: Uuid) -> CustomerResult<Option<Customer>> {
        let customers = self.customers.read().await;
        Ok(customers.get(&id).cloned())
    }

    async fn list(&self) -> CustomerResult<Vec<Customer>> {
        let customers = self.customers.read().await;

        let mut result: Vec<Customer> = customers.values().cloned().collect();
        result.sort_by(|a, b| a.created_at.cmp(&b.created_at));

        Ok(result)
    }

    async fn email_exists(&self, email: &str) -> CustomerResult<bool> {
        let customers = self.customers.read().await;
        let exists = customers
            .values()
            .any(|c| c.email.eq_ignore_ascii_case(email));
        Ok(exists)
    }
}
