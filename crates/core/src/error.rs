#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Validation failed on {field}: {message}")]
    Validation { field: &'static str, message: String },

    #[error("Conflict: {0}")]
    Conflict(String),

    /// A data-integrity assertion failed (e.g. a focus widget row whose
    /// reference column is NULL, or an unknown kind discriminator). These
    /// indicate an upstream bug and must surface loudly, never be papered
    /// over at projection time.
    #[error("Data integrity violation: {0}")]
    Integrity(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Build a `NotFound` from any id-like key (numeric id or slug).
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        CoreError::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}
