//! Route definitions for the `/reservations` resource.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::reservation;
use crate::state::AppState;

/// Routes mounted at `/reservations`.
///
/// ```text
/// GET    /         -> list_reservations (auth, role-scoped)
/// POST   /         -> create_reservation (auth)
/// PATCH  /{id}     -> decide_reservation (chef)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(reservation::list_reservations).post(reservation::create_reservation),
        )
        .route("/{id}", patch(reservation::decide_reservation))
}
