//! Route definitions for the `/profile` resource.

use axum::routing::put;
use axum::Router;

use crate::handlers::profile;
use crate::state::AppState;

/// Routes mounted at `/profile`.
///
/// ```text
/// PUT    /    -> update_profile (auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", put(profile::update_profile))
}
