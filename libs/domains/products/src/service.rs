use std::sync::Arc;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, NewProduct, Product, validate_price, validate_stock};
use crate::repository::ProductRepository;

/// Service layer for product operations
#[derive(Clone)]
pub struct ProductService {
    repository: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    /// Create a product. Price and stock are both checked before returning
    /// so the caller sees every validation failure at once.
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        let mut errors = Vec::new();

        let price = match validate_price(&input.price) {
            Ok(price) => Some(price),
            Err(msg) => {
                errors.push(msg);
                None
            }
        };

        let stock = input.stock.unwrap_or(0);
        if let Err(msg) = validate_stock(stock) {
            errors.push(msg);
        }

        if input.name.trim().is_empty() {
            errors.push("Name is required".to_string());
        }

        let Some(price) = price else {
            return Err(ProductError::Invalid(errors));
        };
        if !errors.is_empty() {
            return Err(ProductError::Invalid(errors));
        }

        self.repository
            .create(NewProduct {
                name: input.name,
                price,
                stock,
            })
            .await
    }

    pub async fn get_product(&self, id: uuid::Uuid) -> ProductResult<Option<Product>> {
        self.repository.get_by_id(id).await
    }

    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.list().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryProductRepository;
    use rust_decimal::Decimal;

    fn service() -> ProductService {
        ProductService::new(Arc::new(InMemoryProductRepository::new()))
    }

    #[tokio::test]
    async fn test_create_product_success() {
        let product = service()
            .create_product(CreateProduct {
                name: "Widget".to_string(),
                price: "9.99".to_string(),
                stock: Some(5),
            })
            .await
            .unwrap();

        assert_eq!(product.price, Decimal::new(999, 2));
        assert_eq!(product.stock, 5);
    }

    #[tokio::test]
    async fn test_create_product_defaults_stock_to_zero() {
        let product = service()
            .create_product(CreateProduct {
                name: "Widget".to_string(),
                price: "1.50".to_string(),
                stock: None,
            })
            .await
            .unwrap();

        assert_eq!(product.stock, 0);
    }

    #[tokio::test]
    async fn test_create_product_negative_price() {
        let result = service()
            .create_product(CreateProduct {
                name: "Widget".to_string(),
                price: "-5".to_string(),
                stock: Some(1),
            })
            .await;

        let Err(ProductError::Invalid(errors)) = result else {
            panic!("expected validation failure");
        };
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("positive"));
    }

    #[tokio::test]
    async fn test_create_product_accumulates_errors() {
        let result = service()
            .create_product(CreateProduct {
                name: "Widget".to_string(),
                price: "-5".to_string(),
                stock: Some(-3),
            })
            .await;

        let Err(ProductError::Invalid(errors)) = result else {
            panic!("expected validation failure");
        };
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("positive"));
        assert!(errors[1].contains("negative"));
    }
}
