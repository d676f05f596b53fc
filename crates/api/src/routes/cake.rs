//! Route definitions for the `/cakes` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::cake;
use crate::state::AppState;

/// Routes mounted at `/cakes`.
///
/// ```text
/// GET    /         -> list_cakes (public)
/// POST   /         -> create_cake (chef)
/// PUT    /{id}     -> update_cake (chef)
/// DELETE /{id}     -> delete_cake (chef)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(cake::list_cakes).post(cake::create_cake))
        .route("/{id}", put(cake::update_cake).delete(cake::delete_cake))
}
