use async_trait::async_trait;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryOrder, TransactionTrait,
};
use uuid::Uuid;

use crate::{
    entity::{self, order, order_item},
    error::{OrderError, OrderResult},
    models::{NewOrder, Order},
    repository::OrderRepository,
};

/// PostgreSQL implementation of OrderRepository using SeaORM
#[derive(Clone)]
pub struct PgOrderRepository {
    db: DatabaseConnection,
}

impl PgOrderRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderRepository for PgOrderRepository {
    async fn create(&self, input: NewOrder) -> OrderResult<Order> {
        let product_ids = input.product_ids.clone();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| OrderError::Database(e.to_string()))?;

        let order_model: order::Model = order::ActiveModel::from(input)
            .insert(&txn)
            .await
            .map_err(|e| OrderError::Database(e.to_string()))?;

        // The order row and its associations commit together or not at all
        for product_id in &product_ids {
            order_item::ActiveModel {
                id: Set(Uuid::now_v7()),
                order_id: Set(order_model.id),
                product_id: Set(*product_id),
            }
            .insert(&txn)
            .await
            .map_err(|e| OrderError::Database(e.to_string()))?;
        }

        txn.commit()
            .await
            .map_err(|e| OrderError::Database(e.to_string()))?;

        tracing::info!(
            order_id = %order_model.id,
            total = %order_model.total_amount,
            "Created order"
        );

        Ok(Order {
            id: order_model.id,
            customer_id: order_model.customer_id,
            product_ids,
            order_date: order_model.order_date.into(),
            total_amount: order_model.total_amount,
            created_at: order_model.created_at.into(),
        })
    }

    async fn get_by_id(&self, id: Uuid) -> OrderResult<Option<Order>> {
        let Some(model) = order::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| OrderError::Database(e.to_string()))?
        else {
            return Ok(None);
        };

        let items = model
            .find_related(order_item::Entity)
            .all(&self.db)
            .await
            .map_err(|e| OrderError::Database(e.to_string()))?;

        Ok(Some(entity::into_order(model, items)))
    }

    async fn list(&self) -> OrderResult<Vec<Order>> {
        let rows = order::Entity::find()
            .find_with_related(order_item::Entity)
            .order_by_asc(order::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| OrderError::Database(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|(model, items)| entity::into_order(model, items))
            .collect())
    }
}
