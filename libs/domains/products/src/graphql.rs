use async_graphql::{Context, InputObject, Object, Result, SimpleObject};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::ProductError;
use crate::models::{CreateProduct, Product};
use crate::service::ProductService;

/// GraphQL representation of a product
#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "Product")]
pub struct ProductObject {
    pub id: Uuid,
    pub name: String,
    pub price: Decimal,
    pub stock: i32,
    pub created_at: DateTime<Utc>,
}

impl From<Product> for ProductObject {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            stock: product.stock,
            created_at: product.created_at,
        }
    }
}

/// Input for creating a product. Price arrives as a string so it can be
/// validated and parsed into an exact decimal.
#[derive(Debug, Clone, InputObject)]
#[graphql(name = "ProductInput")]
pub struct ProductInput {
    pub name: String,
    pub price: String,
    pub stock: Option<i32>,
}

impl From<ProductInput> for CreateProduct {
    fn from(input: ProductInput) -> Self {
        Self {
            name: input.name,
            price: input.price,
            stock: input.stock,
        }
    }
}

/// Payload for the createProduct mutation. `errors` is empty on success.
#[derive(Debug, SimpleObject)]
pub struct CreateProductPayload {
    pub product: Option<ProductObject>,
    pub message: Option<String>,
    pub errors: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ProductQuery;

#[Object]
impl ProductQuery {
    /// List all products
    async fn products(&self, ctx: &Context<'_>) -> Result<Vec<ProductObject>> {
        let service = ctx.data::<ProductService>()?;
        let products = service.list_products().await?;

        Ok(products.into_iter().map(Into::into).collect())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ProductMutation;

#[Object]
impl ProductMutation {
    /// Create a product. Validation failures land in the payload's error
    /// list, all of them at once; a store outage becomes a request error.
    async fn create_product(
        &self,
        ctx: &Context<'_>,
        input: ProductInput,
    ) -> Result<CreateProductPayload> {
        let service = ctx.data::<ProductService>()?;

        match service.create_product(input.into()).await {
            Ok(product) => Ok(CreateProductPayload {
                product: Some(product.into()),
                message: Some("Product created successfully".to_string()),
                errors: Vec::new(),
            }),
            Err(ProductError::Invalid(errors)) => Ok(CreateProductPayload {
                product: None,
                message: None,
                errors,
            }),
            Err(e) => Err(e.into()),
        }
    }
}
