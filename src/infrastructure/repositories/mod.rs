pub mod memory;
pub mod traits;

pub use memory::{InMemoryCategoryRepository, InMemoryProductRepository};
pub use traits::{CategoryRepository, ProductRepository, RepositoryResult};
