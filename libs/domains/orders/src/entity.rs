/// Sea-ORM Entity for the orders table
pub mod order {
    use sea_orm::ActiveValue::Set;
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "orders")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: Uuid,
        pub customer_id: Uuid,
        pub order_date: DateTimeWithTimeZone,
        #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
        pub total_amount: Decimal,
        pub created_at: DateTimeWithTimeZone,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(has_many = "super::order_item::Entity")]
        OrderItem,
    }

    impl Related<super::order_item::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::OrderItem.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}

    impl From<crate::models::NewOrder> for ActiveModel {
        fn from(input: crate::models::NewOrder) -> Self {
            ActiveModel {
                id: Set(Uuid::now_v7()),
                customer_id: Set(input.customer_id),
                order_date: Set(input.order_date.into()),
                total_amount: Set(input.total_amount),
                created_at: Set(chrono::Utc::now().into()),
            }
        }
    }
}

/// Sea-ORM Entity for the order_items join table
pub mod order_item {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "order_items")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: Uuid,
        pub order_id: Uuid,
        pub product_id: Uuid,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::order::Entity",
            from = "Column::OrderId",
            to = "super::order::Column::Id"
        )]
        Order,
    }

    impl Related<super::order::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Order.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Rebuild a domain Order from an order row and its item rows
pub fn into_order(model: order::Model, items: Vec<order_item::Model>) -> crate::models::Order {
    crate::models::Order {
        id: model.id,
        customer_id: model.customer_id,
        product_ids: items.into_iter().map(|item| item.product_id).collect(),
        order_date: model.order_date.into(),
        total_amount: model.total_amount,
        created_at: model.created_at.into(),
    }
}
