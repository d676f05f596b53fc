//! Handlers for the `/cakes` resource.
//!
//! Listing is public; create, update, and delete are chef-only and run in
//! store transactions since they touch the same snapshot the booking
//! engine reads.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use patisserie_core::error::CoreError;
use patisserie_core::model::cake::{validate_cake, DEFAULT_IMAGE};
use patisserie_core::model::Cake;
use patisserie_core::types::new_id;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireChef;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for cake create and update.
#[derive(Debug, Deserialize)]
pub struct CakeInput {
    pub name: String,
    pub price: u32,
    pub description: String,
    /// Optional image path; a default is assigned when absent.
    pub image: Option<String>,
}

/// GET /api/v1/cakes
///
/// Public catalogue listing.
pub async fn list_cakes(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Cake>>>> {
    let snapshot = state.store.read().await;
    Ok(Json(DataResponse {
        data: snapshot.cakes,
    }))
}

/// POST /api/v1/cakes (chef only)
pub async fn create_cake(
    RequireChef(_chef): RequireChef,
    State(state): State<AppState>,
    Json(input): Json<CakeInput>,
) -> AppResult<Json<DataResponse<Cake>>> {
    validate_cake(&input.name, input.price)
        .map_err(|e| AppError::Core(CoreError::Validation(e)))?;

    let cake = state
        .store
        .with_transaction(move |snapshot| {
            let cake = Cake {
                id: new_id(),
                name: input.name,
                price: input.price,
                image: input.image.unwrap_or_else(|| DEFAULT_IMAGE.to_string()),
                description: input.description,
            };
            snapshot.cakes.push(cake.clone());
            Ok::<_, AppError>(cake)
        })
        .await?;

    tracing::info!(cake_id = %cake.id, name = %cake.name, "Cake created");
    Ok(Json(DataResponse { data: cake }))
}

/// PUT /api/v1/cakes/{id} (chef only)
pub async fn update_cake(
    RequireChef(_chef): RequireChef,
    State(state): State<AppState>,
    Path(cake_id): Path<String>,
    Json(input): Json<CakeInput>,
) -> AppResult<Json<DataResponse<Cake>>> {
    validate_cake(&input.name, input.price)
        .map_err(|e| AppError::Core(CoreError::Validation(e)))?;

    let cake = state
        .store
        .with_transaction(move |snapshot| -> Result<Cake, AppError> {
            let cake = snapshot
                .cake_mut(&cake_id)
                .ok_or(AppError::Core(CoreError::NotFound {
                    entity: "Cake",
                    id: cake_id.clone(),
                }))?;
            cake.name = input.name;
            cake.price = input.price;
            cake.description = input.description;
            if let Some(image) = input.image {
                cake.image = image;
            }
            Ok(cake.clone())
        })
        .await?;

    Ok(Json(DataResponse { data: cake }))
}

/// DELETE /api/v1/cakes/{id} (chef only)
///
/// Removes the cake from the catalogue. Existing reservations and blocked
/// dates keep their denormalized cake name and remain untouched.
pub async fn delete_cake(
    RequireChef(_chef): RequireChef,
    State(state): State<AppState>,
    Path(cake_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    state
        .store
        .with_transaction(move |snapshot| {
            let before = snapshot.cakes.len();
            snapshot.cakes.retain(|c| c.id != cake_id);
            if snapshot.cakes.len() == before {
                return Err(AppError::Core(CoreError::NotFound {
                    entity: "Cake",
                    id: cake_id.clone(),
                }));
            }
            Ok(())
        })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
