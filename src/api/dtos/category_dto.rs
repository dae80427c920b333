use serde::Deserialize;
use validator::Validate;

/// Payload for creating a category. Carries no id; the service assigns one.
///
/// Fields deserialize to options so a `null` or missing field is reported as
/// a validation failure instead of a deserialization error.
#[derive(Debug, Deserialize, Validate)]
pub struct CategoryRequest {
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
}
