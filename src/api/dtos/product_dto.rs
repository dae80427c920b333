use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

/// Payload for creating or updating a product.
///
/// Every field deserializes to an option so a `null` or missing field is
/// reported as a validation failure instead of a deserialization error.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    #[validate(
        required(message = "must not be blank"),
        custom(function = super::not_blank)
    )]
    pub name: Option<String>,

    #[validate(
        required(message = "must not be blank"),
        custom(function = super::not_blank)
    )]
    pub description: Option<String>,

    #[validate(required(message = "must not be null"))]
    pub price: Option<Decimal>,

    #[validate(
        required(message = "must not be blank"),
        custom(function = super::not_blank)
    )]
    pub category_id: Option<String>,

    #[validate(
        required(message = "must not be null"),
        range(min = 1, message = "must be greater than or equal to 1")
    )]
    pub stock: Option<i32>,
}
