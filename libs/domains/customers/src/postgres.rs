use async_trait::async_trait;
use sea_orm::sea_query::{Expr, ExprTrait, Func};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    TransactionTrait,
};
use uuid::Uuid;

use crate::{
    entity,
    error::{CustomerError, CustomerResult},
    models::{CreateCustomer, Customer},
    repository::CustomerRepository,
};

/// PostgreSQL implementation of CustomerRepository using SeaORM
#[derive(Clone)]
pub struct PgCustomerRepository {
    db: DatabaseConnection,
}

impl PgCustomerRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Map a DbErr on insert to a domain error, recognizing the unique
/// constraint on email.
fn map_insert_err(e: DbErr, email: &str) -> CustomerError {
    let err_str = e.to_string();
    if err_str.contains("duplicate key") || err_str.contains("unique constraint") {
        CustomerError::DuplicateEmail(email.to_string())
    } else {
        CustomerError::Database(err_str)
    }
}

#[async_trait]
impl CustomerRepository for PgCustomerRepository {
    async fn create(&self, input: CreateCustomer) -> CustomerResult<Customer> {
        let email = input.email.clone();
        let active_model: entity::ActiveModel = input.into();

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| map_insert_err(e, &email))?;

        tracing::info!(customer_id = %model.id, "Created customer");
        Ok(model.into())
    }

    async fn create_many(&self, inputs: Vec<CreateCustomer>) -> CustomerResult<Vec<Customer>> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| CustomerError::Database(e.to_string()))?;

        let mut created = Vec::with_capacity(inputs.len());
        for input in inputs {
            let email = input.email.clone();
            let active_model: entity::ActiveModel = input.into();

            // Dropping the transaction on error rolls everything back
            let model = active_model
                .insert(&txn)
                .await
                .map_err(|e| map_insert_err(e, &email))?;

            created.push(Customer::from(model));
        }

        txn.commit()
            .await
            .map_err(|e| CustomerError::Database(e.to_string()))?;

        tracing::info!(count = created.len(), "Created customer batch");
        Ok(created)
    }

    async fn get_by_id(&self, id: Uuid) -> CustomerResult<Option<Customer>> {
        let model = entity::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CustomerError::Database(e.to_string()))?;

        Ok(model.map(|m| m.into()))
    }

    async fn list(&self) -> CustomerResult<Vec<Customer>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| CustomerError::Database(e.to_string()))?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    async fn email_exists(&self, email: &str) -> CustomerResult<bool> {
        let exists = entity::Entity::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(entity::Column::Email)))
                    .eq(email.to_lowercase()),
            )
            .one(&self.db)
            .await
            .map_err(|e| CustomerError::Database(e.to_string()))?
            .is_some();

        Ok(exists)
    }
}
