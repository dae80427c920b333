use std::sync::RwLock;

use async_trait::async_trait;

use super::traits::{CategoryRepository, ProductRepository, RepositoryResult};
use crate::domain::{Category, Product, RepositoryError};

/// In-memory category store. Keeps insertion order; `save` replaces an entry
/// that already carries the same id.
#[derive(Default)]
pub struct InMemoryCategoryRepository {
    categories: RwLock<Vec<Category>>,
}

#[derive(Default)]
pub struct InMemoryProductRepository {
    products: RwLock<Vec<Product>>,
}

fn poisoned(store: &str) -> RepositoryError {
    RepositoryError::Storage(format!("{store} store lock poisoned"))
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn find_all(&self) -> RepositoryResult<Vec<Category>> {
        let categories = self.categories.read().map_err(|_| poisoned("category"))?;
        Ok(categories.clone())
    }

    async fn find_by_id(&self, id: &str) -> RepositoryResult<Option<Category>> {
        let categories = self.categories.read().map_err(|_| poisoned("category"))?;
        Ok(categories.iter().find(|c| c.id == id).cloned())
    }

    async fn save(&self, category: &Category) -> RepositoryResult<Category> {
        let mut categories = self.categories.write().map_err(|_| poisoned("category"))?;
        match categories.iter_mut().find(|c| c.id == category.id) {
            Some(existing) => *existing = category.clone(),
            None => categories.push(category.clone()),
        }
        Ok(category.clone())
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_all(&self) -> RepositoryResult<Vec<Product>> {
        let products = self.products.read().map_err(|_| poisoned("product"))?;
        Ok(products.clone())
    }

    async fn find_by_id(&self, id: &str) -> RepositoryResult<Option<Product>> {
        let products = self.products.read().map_err(|_| poisoned("product"))?;
        Ok(products.iter().find(|p| p.id == id).cloned())
    }

    async fn save(&self, product: &Product) -> RepositoryResult<Product> {
        let mut products = self.products.write().map_err(|_| poisoned("product"))?;
        match products.iter_mut().find(|p| p.id == product.id) {
            Some(existing) => *existing = product.clone(),
            None => products.push(product.clone()),
        }
        Ok(product.clone())
    }
}
