use serde::{Deserialize, Serialize};

/// A persisted catalog category. The id is assigned by the service layer at
/// creation time and never supplied by clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: String,
}
