pub mod category_dto;
pub mod product_dto;

pub use category_dto::CategoryRequest;
pub use product_dto::ProductRequest;

use validator::ValidationError;

/// Rejects empty and whitespace-only strings. Shared by every required
/// free-text field on the request DTOs.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_blank");
        error.message = Some("must not be blank".into());
        return Err(error);
    }
    Ok(())
}
