use carlot_core::validation::ValidationErrors;

/// Why a car could not be saved.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    /// The candidate failed one or more rules; nothing was written.
    #[error("Validation failed: {0}")]
    Invalid(ValidationErrors),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

