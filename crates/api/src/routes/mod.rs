pub mod auth;
pub mod availability;
pub mod cake;
pub mod health;
pub mod notification;
pub mod profile;
pub mod reservation;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/signup                     create account (public)
/// /auth/login                      login (public)
/// /auth/me                         current account (requires auth)
///
/// /cakes                           list (public), create (chef)
/// /cakes/{id}                      update, delete (chef)
///
/// /reservations                    list (auth), create (auth)
/// /reservations/{id}               decide (chef, PATCH)
///
/// /availability/{cake_id}          blocked dates (public)
///
/// /notifications                   list (auth)
/// /notifications/unread-count      count (auth)
/// /notifications/{id}/read         mark read (auth)
/// /notifications/{id}              delete (auth)
///
/// /profile                         update own profile (auth, PUT)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/cakes", cake::router())
        .nest("/reservations", reservation::router())
        .nest("/availability", availability::router())
        .nest("/notifications", notification::router())
        .nest("/profile", profile::router())
}
