use crate::types::DbId;

/// Domain error taxonomy shared by the data-access and request layers.
///
/// The HTTP layer maps each variant onto a status code and a machine-readable
/// error code; see the api crate's `error` module.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Lookup by primary key came up empty.
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// Lookup by a secondary key (e.g. an external catalog id) came up empty.
    #[error("{entity} with {key} = {value} not found")]
    NotFoundByKey {
        entity: &'static str,
        key: &'static str,
        value: String,
    },

    /// Request payload failed schema or semantic validation.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A unique field already holds the given value.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Missing or invalid credentials, or an ownership mismatch.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Valid credentials, but the account may not perform the action.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
