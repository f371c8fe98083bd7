use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// A child record was addressed to a trip that does not exist.
    #[error("Trip not found: {id}")]
    ParentMissing { id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),
}
