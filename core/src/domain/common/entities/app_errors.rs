use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    #[error("unknown diet: {0}")]
    UnknownDiet(String),

    #[error("unknown allergen: {0}")]
    UnknownAllergen(String),

    #[error("invalid goal: {0}")]
    InvalidGoal(String),

    #[error("serving size must be a positive number of grams")]
    InvalidServingSize,

    #[error("invalid ingredient: {0}")]
    InvalidIngredient(String),

    #[error("invalid history entry: {0}")]
    InvalidHistoryEntry(String),

    #[error("invalid reference data: {0}")]
    InvalidReferenceData(String),

    #[error("storage error: {0}")]
    Storage(String),
}

impl CoreError {
    /// Errors caused by the caller's input rather than by the environment.
    pub fn is_validation(&self) -> bool {
        !matches!(self, CoreError::Storage(_) | CoreError::InvalidReferenceData(_))
    }
}
