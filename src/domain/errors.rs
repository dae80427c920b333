use thiserror::Error;

/// Failures raised by a persistence provider. These are never recovered by the
/// service layer; they propagate to the error mapper as internal errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("storage failure: {0}")]
    Storage(String),
}
