use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A persisted catalog product. `category_id` references a category by id but
/// referential integrity is not enforced by this service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub stock: i32,
    pub category_id: String,
}
