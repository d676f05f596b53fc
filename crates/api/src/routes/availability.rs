//! Route definitions for the `/availability` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::availability;
use crate::state::AppState;

/// Routes mounted at `/availability`.
///
/// ```text
/// GET    /{cake_id}   -> list_availability (public)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{cake_id}", get(availability::list_availability))
}
