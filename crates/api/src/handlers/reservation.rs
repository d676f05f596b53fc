//! Handlers for the `/reservations` resource.
//!
//! The create and decide handlers are thin shells around the booking
//! engine: parse input, open one transaction, delegate. The availability
//! check and the write happen inside the same transaction -- never decide
//! from a read-only snapshot here.

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;

use patisserie_core::booking;
use patisserie_core::error::CoreError;
use patisserie_core::model::{Decision, Reservation};
use patisserie_core::types::Date;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireChef;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /reservations`.
#[derive(Debug, Deserialize)]
pub struct CreateReservationRequest {
    pub cake_id: String,
    /// ISO `YYYY-MM-DD`, no time component.
    pub date: String,
}

/// Request body for `PATCH /reservations/{id}`.
#[derive(Debug, Deserialize)]
pub struct DecideReservationRequest {
    /// `accepted` or `refused`. Anything else -- including `pending` -- is
    /// an invalid transition.
    pub status: String,
}

/// GET /api/v1/reservations
///
/// Role-scoped listing: the chef sees every reservation, customers see
/// their own. Ordered by creation time.
pub async fn list_reservations(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Reservation>>>> {
    let snapshot = state.store.read().await;

    let mut reservations: Vec<Reservation> = if auth.identity().is_chef() {
        snapshot.reservations
    } else {
        snapshot
            .reservations
            .into_iter()
            .filter(|r| r.user_id == auth.user_id)
            .collect()
    };
    reservations.sort_by_key(|r| r.created_at);

    Ok(Json(DataResponse { data: reservations }))
}

/// POST /api/v1/reservations
///
/// Create a `pending` reservation for `(cake, date)`. Fails 404 if the
/// cake does not exist and 409 if the date is already blocked.
pub async fn create_reservation(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateReservationRequest>,
) -> AppResult<Json<DataResponse<Reservation>>> {
    let date: Date = input.date.parse().map_err(|_| {
        AppError::Core(CoreError::Validation(format!(
            "Invalid date '{}'. Expected ISO format YYYY-MM-DD",
            input.date
        )))
    })?;

    let identity = auth.identity();
    let reservation = state
        .store
        .with_transaction(move |snapshot| {
            booking::create_reservation(snapshot, &identity, &input.cake_id, date)
                .map_err(AppError::from)
        })
        .await?;

    tracing::info!(
        reservation_id = %reservation.id,
        cake_id = %reservation.cake_id,
        date = %reservation.date,
        "Reservation created"
    );
    Ok(Json(DataResponse { data: reservation }))
}

/// PATCH /api/v1/reservations/{id} (chef only)
///
/// Apply an accept/refuse decision. Accepting blocks the date in the same
/// transaction; replays and decisions on non-pending reservations fail 409.
pub async fn decide_reservation(
    RequireChef(_chef): RequireChef,
    State(state): State<AppState>,
    Path(reservation_id): Path<String>,
    Json(input): Json<DecideReservationRequest>,
) -> AppResult<Json<DataResponse<Reservation>>> {
    let decision: Decision = input.status.parse().map_err(|reason| {
        AppError::Core(CoreError::InvalidTransition {
            reservation_id: reservation_id.clone(),
            reason,
        })
    })?;

    let reservation = state
        .store
        .with_transaction(move |snapshot| {
            booking::decide_reservation(snapshot, &reservation_id, decision)
                .map_err(AppError::from)
        })
        .await?;

    tracing::info!(
        reservation_id = %reservation.id,
        status = %reservation.status,
        "Reservation decided"
    );
    Ok(Json(DataResponse { data: reservation }))
}
