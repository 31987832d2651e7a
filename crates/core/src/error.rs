//! Domain error taxonomy.
//!
//! Handlers map these onto HTTP statuses in the API crate; the variants here
//! mirror the response taxonomy (400/401/403/404/409/500) without knowing
//! anything about HTTP.

/// A domain-level error.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The requested entity does not exist.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: String },

    /// A required field is missing or a value is malformed.
    #[error("validation error: {0}")]
    Validation(String),

    /// The operation conflicts with existing state (uniqueness, one-to-one).
    #[error("conflict: {0}")]
    Conflict(String),

    /// The caller is not authenticated.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// The caller is authenticated but not allowed, or a business rule
    /// blocks the operation regardless of role.
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// An unclassified internal failure.
    #[error("internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Shorthand for [`CoreError::NotFound`] with a displayable id.
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        CoreError::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}
