use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::api::dtos::CategoryRequest;
use crate::domain::Category;
use crate::error::{AppError, AppResult};
use crate::infrastructure::repositories::CategoryRepository;

#[derive(Clone)]
pub struct CategoryService {
    category_repo: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    pub fn new(category_repo: Arc<dyn CategoryRepository>) -> Self {
        Self { category_repo }
    }

    pub async fn list(&self) -> AppResult<Vec<Category>> {
        Ok(self.category_repo.find_all().await?)
    }

    /// Absence is not an error at this layer; the handler decides whether a
    /// missing category should fail the request.
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<Category>> {
        Ok(self.category_repo.find_by_id(id).await?)
    }

    pub async fn create(&self, request: CategoryRequest) -> AppResult<Category> {
        // The handlers validate before calling in; these guard the invariant
        // if a caller skips validation.
        let name = request
            .name
            .ok_or_else(|| AppError::missing_field("name", "must not be blank"))?;
        let description = request
            .description
            .ok_or_else(|| AppError::missing_field("description", "must not be blank"))?;

        let category = Category {
            id: Uuid::new_v4().to_string(),
            name,
            description,
        };

        let saved = self.category_repo.save(&category).await?;
        info!(category_id = %saved.id, "category created");
        Ok(saved)
    }
}
