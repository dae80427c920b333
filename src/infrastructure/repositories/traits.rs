use async_trait::async_trait;

use crate::domain::{Category, Product, RepositoryError};

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Persistence contract for categories. Implementations must be safe for
/// concurrent use; the service layer adds no locking of its own.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn find_all(&self) -> RepositoryResult<Vec<Category>>;
    async fn find_by_id(&self, id: &str) -> RepositoryResult<Option<Category>>;
    /// Returns what was actually stored, which is what callers must hand back
    /// to clients.
    async fn save(&self, category: &Category) -> RepositoryResult<Category>;
}

/// Persistence contract for products.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn find_all(&self) -> RepositoryResult<Vec<Product>>;
    async fn find_by_id(&self, id: &str) -> RepositoryResult<Option<Product>>;
    async fn save(&self, product: &Product) -> RepositoryResult<Product>;
}
