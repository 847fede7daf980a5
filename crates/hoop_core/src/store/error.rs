use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: Uuid },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid reference: {0}")]
    ForeignKey(String),

    #[error("Jersey number {number} already taken in this team")]
    DuplicateNumber { number: u8 },
}

impl StoreError {
    pub fn not_found(entity: &'static str, id: Uuid) -> Self {
        StoreError::NotFound { entity, id }
    }

    /// Stable code for API error payloads.
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::NotFound { .. } => "NOT_FOUND",
            StoreError::Validation(_) => "VALIDATION",
            StoreError::ForeignKey(_) => "FOREIGN_KEY",
            StoreError::DuplicateNumber { .. } => "DUPLICATE_NUMBER",
        }
    }
}
