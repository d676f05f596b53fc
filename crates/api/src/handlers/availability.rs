//! Handler for the `/availability` resource.

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use patisserie_core::availability::blocked_dates_for;
use patisserie_core::types::Date;

use crate::error::AppResult;
use crate::state::AppState;

/// Response body for `GET /availability/{cake_id}`.
#[derive(Debug, Serialize)]
pub struct AvailabilityResponse {
    pub blocked_dates: Vec<Date>,
}

/// GET /api/v1/availability/{cake_id}
///
/// Public: the dates currently committed for a cake. A cake with no blocks
/// (or an unknown cake id) yields an empty list. Read-only -- this answer
/// must not be used as the basis for a write; the booking engine re-checks
/// inside its own transaction.
pub async fn list_availability(
    State(state): State<AppState>,
    Path(cake_id): Path<String>,
) -> AppResult<Json<AvailabilityResponse>> {
    let snapshot = state.store.read().await;
    Ok(Json(AvailabilityResponse {
        blocked_dates: blocked_dates_for(&snapshot, &cake_id),
    }))
}
