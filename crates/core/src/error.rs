use crate::types::Date;

/// Domain-level error taxonomy.
///
/// Every variant carries the identifiers the collaborator layer needs to
/// render a user-facing message. All are terminal to the triggering
/// request; nothing here is retried internally.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    /// The requested date is already blocked (or no longer available at
    /// decision time) for this cake.
    #[error("Date {date} is not available for cake {cake_id}")]
    DateUnavailable { cake_id: String, date: Date },

    /// A decision was applied to a reservation that is not `pending`, or
    /// the decision value itself was not recognized.
    #[error("Invalid transition for reservation {reservation_id}: {reason}")]
    InvalidTransition {
        reservation_id: String,
        reason: String,
    },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),
}
