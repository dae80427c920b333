use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::api::dtos::ProductRequest;
use crate::domain::Product;
use crate::error::{AppError, AppResult};
use crate::infrastructure::repositories::ProductRepository;

#[derive(Clone)]
pub struct ProductService {
    product_repo: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(product_repo: Arc<dyn ProductRepository>) -> Self {
        Self { product_repo }
    }

    pub async fn list(&self) -> AppResult<Vec<Product>> {
        Ok(self.product_repo.find_all().await?)
    }

    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<Product>> {
        Ok(self.product_repo.find_by_id(id).await?)
    }

    pub async fn create(&self, request: ProductRequest) -> AppResult<Product> {
        let product = build_product(Uuid::new_v4().to_string(), request)?;

        let saved = self.product_repo.save(&product).await?;
        info!(product_id = %saved.id, "product created");
        Ok(saved)
    }

    /// Replaces the product stored under `id`. Returns `None` when no such
    /// product exists; the handler turns that into the not-found response.
    pub async fn update(&self, id: &str, request: ProductRequest) -> AppResult<Option<Product>> {
        if self.product_repo.find_by_id(id).await?.is_none() {
            return Ok(None);
        }

        let product = build_product(id.to_string(), request)?;
        let saved = self.product_repo.save(&product).await?;
        info!(product_id = %saved.id, "product updated");
        Ok(Some(saved))
    }
}

fn build_product(id: String, request: ProductRequest) -> AppResult<Product> {
    // The handlers validate before calling in; these guard the invariant if a
    // caller skips validation.
    let name = request
        .name
        .ok_or_else(|| AppError::missing_field("name", "must not be blank"))?;
    let description = request
        .description
        .ok_or_else(|| AppError::missing_field("description", "must not be blank"))?;
    let price = request
        .price
        .ok_or_else(|| AppError::missing_field("price", "must not be null"))?;
    let category_id = request
        .category_id
        .ok_or_else(|| AppError::missing_field("categoryId", "must not be blank"))?;
    let stock = request
        .stock
        .ok_or_else(|| AppError::missing_field("stock", "must not be null"))?;

    Ok(Product {
        id,
        name,
        description,
        price,
        stock,
        category_id,
    })
}
