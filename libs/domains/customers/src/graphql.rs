use async_graphql::{Context, InputObject, Object, Result, SimpleObject};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::CustomerError;
use crate::models::{CreateCustomer, Customer};
use crate::service::CustomerService;

/// GraphQL representation of a customer
#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "Customer")]
pub struct CustomerObject {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Customer> for CustomerObject {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id,
            name: customer.name,
            email: customer.email,
            phone: customer.phone,
            created_at: customer.created_at,
        }
    }
}

/// Input for creating a customer
#[derive(Debug, Clone, InputObject)]
#[graphql(name = "CustomerInput")]
pub struct CustomerInput {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

impl From<CustomerInput> for CreateCustomer {
    fn from(input: CustomerInput) -> Self {
        Self {
            name: input.name,
            email: input.email,
            phone: input.phone,
        }
    }
}

/// Payload for the createCustomer mutation. `errors` is empty on success.
#[derive(Debug, SimpleObject)]
pub struct CreateCustomerPayload {
    pub customer: Option<CustomerObject>,
    pub message: Option<String>,
    pub errors: Vec<String>,
}

/// Payload for the bulkCreateCustomers mutation. Created rows and per-row
/// errors can both be non-empty.
#[derive(Debug, SimpleObject)]
pub struct BulkCreateCustomersPayload {
    pub customers: Vec<CustomerObject>,
    pub errors: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CustomerQuery;

#[Object]
impl CustomerQuery {
    /// List all customers
    async fn customers(&self, ctx: &Context<'_>) -> Result<Vec<CustomerObject>> {
        let service = ctx.data::<CustomerService>()?;
        let customers = service.list_customers().await?;

        Ok(customers.into_iter().map(Into::into).collect())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CustomerMutation;

#[Object]
impl CustomerMutation {
    /// Create a single customer. Validation and duplicate failures land in
    /// the payload's error list; a store outage becomes a request error.
    async fn create_customer(
        &self,
        ctx: &Context<'_>,
        input: CustomerInput,
    ) -> Result<CreateCustomerPayload> {
        let service = ctx.data::<CustomerService>()?;

        match service.create_customer(input.into()).await {
            Ok(customer) => Ok(CreateCustomerPayload {
                customer: Some(customer.into()),
                message: Some("Customer created successfully".to_string()),
                errors: Vec::new(),
            }),
            Err(e @ (CustomerError::InvalidInput(_) | CustomerError::DuplicateEmail(_))) => {
                Ok(CreateCustomerPayload {
                    customer: None,
                    message: None,
                    errors: vec![e.to_string()],
                })
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Create a batch of customers with per-row error reporting.
    async fn bulk_create_customers(
        &self,
        ctx: &Context<'_>,
        inputs: Vec<CustomerInput>,
    ) -> Result<BulkCreateCustomersPayload> {
        let service = ctx.data::<CustomerService>()?;

        let report = service
            .bulk_create_customers(inputs.into_iter().map(Into::into).collect())
            .await?;

        Ok(BulkCreateCustomersPayload {
            customers: report.created.into_iter().map(Into::into).collect(),
            errors: report.errors,
        })
    }
}
