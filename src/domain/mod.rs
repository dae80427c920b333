pub mod category;
pub mod errors;
pub mod product;

pub use category::Category;
pub use errors::RepositoryError;
pub use product::Product;
