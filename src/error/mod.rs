mod app_error;
mod validation_mapping;


pub use app_error::{ApiError, AppError, AppResult, FieldViolation};
