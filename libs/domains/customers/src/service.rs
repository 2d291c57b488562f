use std::collections::HashSet;
use std::sync::Arc;

use crate::error::{CustomerError, CustomerResult};
use crate::models::{CreateCustomer, Customer, validate_email, validate_phone};
use crate::repository::CustomerRepository;

/// Outcome of a bulk customer creation.
///
/// `created` holds the rows that were persisted, `errors` holds one
/// message per rejected row. Both can be non-empty at once: valid rows
/// commit even when siblings fail.
#[derive(Debug, Default)]
pub struct BulkCreateReport {
    pub created: Vec<Customer>,
    pub errors: Vec<String>,
}

/// Service layer for customer operations
#[derive(Clone)]
pub struct CustomerService {
    repository: Arc<dyn CustomerRepository>,
}

impl CustomerService {
    pub fn new(repository: Arc<dyn CustomerRepository>) -> Self {
        Self { repository }
    }

    /// Create a single customer after validating email and phone.
    pub async fn create_customer(&self, input: CreateCustomer) -> CustomerResult<Customer> {
        if input.name.trim().is_empty() {
            return Err(CustomerError::InvalidInput("Name is required".to_string()));
        }

        validate_email(&input.email).map_err(CustomerError::InvalidInput)?;

        if let Some(ref phone) = input.phone {
            validate_phone(phone).map_err(CustomerError::InvalidInput)?;
        }

        self.repository.create(input).await
    }

    /// Create a batch of customers with per-row validation.
    ///
    /// Each row is checked independently; failures are reported as
    /// `Row N: <reason>` with 1-based row numbers and do not block the
    /// remaining rows. Rows that pass every check are persisted together
    /// in one transaction.
    ///
    /// Checks per row, first failure wins:
    /// 1. email syntax (empty counts as missing)
    /// 2. duplicate email, against both the store and earlier batch rows
    /// 3. phone syntax, when a phone is present
    pub async fn bulk_create_customers(
        &self,
        inputs: Vec<CreateCustomer>,
    ) -> CustomerResult<BulkCreateReport> {
        let mut errors = Vec::new();
        let mut accepted = Vec::new();
        let mut batch_emails: HashSet<String> = HashSet::new();

        for (idx, input) in inputs.into_iter().enumerate() {
            let row = idx + 1;

            if let Err(msg) = validate_email(&input.email) {
                errors.push(format!("Row {}: {}", row, msg));
                continue;
            }

            // Batch-local set first, so intra-batch duplicates skip the
            // store round-trip
            let lowered = input.email.to_lowercase();
            let duplicate = batch_emails.contains(&lowered)
                || self.repository.email_exists(&input.email).await?;
            if duplicate {
                errors.push(format!(
                    "Row {}: Customer with email '{}' already exists",
                    row, input.email
                ));
                continue;
            }

            if let Some(ref phone) = input.phone {
                if let Err(msg) = validate_phone(phone) {
                    errors.push(format!("Row {}: {}", row, msg));
                    continue;
                }
            }

            batch_emails.insert(lowered);
            accepted.push(input);
        }

        let created = if accepted.is_empty() {
            Vec::new()
        } else {
            match self.repository.create_many(accepted).await {
                Ok(customers) => customers,
                Err(e) => {
                    // Persistence failed for the whole batch; surface it
                    // alongside the per-row errors instead of aborting.
                    tracing::error!(error = %e, "Bulk customer persistence failed");
                    errors.push(e.to_string());
                    Vec::new()
                }
            }
        };

        Ok(BulkCreateReport { created, errors })
    }

    pub async fn get_customer(&self, id: uuid::Uuid) -> CustomerResult<Option<Customer>> {
        self.repository.get_by_id(id).await
    }

    pub async fn list_customers(&self) -> CustomerResult<Vec<Customer>> {
        self.repository.list().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{InMemoryCustomerRepository, MockCustomerRepository};

    fn input(name: &str, email: &str) -> CreateCustomer {
        CreateCustomer {
            name: name.to_string(),
            email: email.to_string(),
            phone: None,
        }
    }

    fn service_with_memory() -> CustomerService {
        CustomerService::new(Arc::new(InMemoryCustomerRepository::new()))
    }

    #[tokio::test]
    async fn test_create_customer_success() {
        let service = service_with_memory();

        let customer = service
            .create_customer(CreateCustomer {
                name: "Alice".to_string(),
                email: "alice@example.com".to_string(),
                phone: Some("+1234567890".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(customer.email, "alice@example.com");
    }

    #[tokio::test]
    async fn test_create_customer_rejects_bad_email() {
        let service = service_with_memory();

        let result = service.create_customer(input("Alice", "not-an-email")).await;
        assert!(matches!(result, Err(CustomerError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_create_customer_rejects_bad_phone() {
        let service = service_with_memory();

        let result = service
            .create_customer(CreateCustomer {
                name: "Alice".to_string(),
                email: "alice@example.com".to_string(),
                phone: Some("12345".to_string()),
            })
            .await;

        assert!(matches!(result, Err(CustomerError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_create_customer_rejects_empty_name() {
        let service = service_with_memory();

        let result = service.create_customer(input("  ", "alice@example.com")).await;
        assert!(matches!(result, Err(CustomerError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_create_customer_duplicate_email() {
        let service = service_with_memory();

        service.create_customer(input("Alice", "alice@example.com")).await.unwrap();

        let result = service.create_customer(input("Alice 2", "alice@example.com")).await;
        assert!(matches!(result, Err(CustomerError::DuplicateEmail(_))));
    }

    #[tokio::test]
    async fn test_bulk_create_mixed_batch() {
        let service = service_with_memory();

        let report = service
            .bulk_create_customers(vec![
                input("Alice", "a@x.com"),
                input("Alice Again", "a@x.com"),
                input("Bob", "bad-email"),
            ])
            .await
            .unwrap();

        assert_eq!(report.created.len(), 1);
        assert_eq!(report.created[0].email, "a@x.com");

        assert_eq!(report.errors.len(), 2);
        assert!(report.errors[0].starts_with("Row 2:"));
        assert!(report.errors[0].contains("already exists"));
        assert!(report.errors[1].starts_with("Row 3:"));
        assert!(report.errors[1].contains("Invalid email format"));
    }

    #[tokio::test]
    async fn test_bulk_create_detects_persisted_duplicates() {
        let service = service_with_memory();

        service.create_customer(input("Alice", "alice@example.com")).await.unwrap();

        let report = service
            .bulk_create_customers(vec![input("Alice 2", "ALICE@example.com")])
            .await
            .unwrap();

        assert!(report.created.is_empty());
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("already exists"));
    }

    #[tokio::test]
    async fn test_bulk_create_reports_phone_errors_per_row() {
        let service = service_with_memory();

        let report = service
            .bulk_create_customers(vec![
                CreateCustomer {
                    name: "Alice".to_string(),
                    email: "alice@example.com".to_string(),
                    phone: Some("bogus".to_string()),
                },
                input("Bob", "bob@example.com"),
            ])
            .await
            .unwrap();

        assert_eq!(report.created.len(), 1);
        assert_eq!(report.created[0].email, "bob@example.com");
        assert!(report.errors[0].starts_with("Row 1:"));
        assert!(report.errors[0].contains("Invalid phone format"));
    }

    #[tokio::test]
    async fn test_bulk_create_empty_input() {
        let service = service_with_memory();

        let report = service.bulk_create_customers(vec![]).await.unwrap();
        assert!(report.created.is_empty());
        assert!(report.errors.is_empty());
    }

    #[tokio::test]
    async fn test_bulk_create_checks_store_once_per_distinct_email() {
        let mut mock = MockCustomerRepository::new();
        // An intra-batch duplicate is caught by the batch set, so only the
        // first occurrence reaches the store
        mock.expect_email_exists().times(1).returning(|_| Ok(false));
        mock.expect_create_many()
            .returning(|inputs| Ok(inputs.into_iter().map(Customer::new).collect()));

        let service = CustomerService::new(Arc::new(mock));

        let report = service
            .bulk_create_customers(vec![
                input("Alice", "alice@example.com"),
                input("Alice Again", "ALICE@example.com"),
            ])
            .await
            .unwrap();

        assert_eq!(report.created.len(), 1);
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].starts_with("Row 2:"));
    }

    #[tokio::test]
    async fn test_bulk_create_surfaces_persistence_failure() {
        let mut mock = MockCustomerRepository::new();
        mock.expect_email_exists().returning(|_| Ok(false));
        mock.expect_create_many()
            .returning(|_| Err(CustomerError::Database("connection reset".to_string())));

        let service = CustomerService::new(Arc::new(mock));

        let report = service
            .bulk_create_customers(vec![input("Alice", "alice@example.com")])
            .await
            .unwrap();

        assert!(report.created.is_empty());
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("Database error: connection reset"));
    }

    #[tokio::test]
    async fn test_bulk_create_propagates_lookup_failure() {
        let mut mock = MockCustomerRepository::new();
        mock.expect_email_exists()
            .returning(|_| Err(CustomerError::Database("connection reset".to_string())));

        let service = CustomerService::new(Arc::new(mock));

        let result = service
            .bulk_create_customers(vec![input("Alice", "alice@example.com")])
            .await;

        assert!(matches!(result, Err(CustomerError::Database(_))));
    }
}
