//! Handler for the `/profile` resource.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use patisserie_core::error::CoreError;
use patisserie_core::model::user::{validate_username, PublicUser};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `PUT /profile`. Absent fields are left unchanged.
#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub username: Option<String>,
    pub avatar: Option<String>,
}

/// PUT /api/v1/profile
///
/// Update the authenticated user's username and/or avatar. The uniqueness
/// check and the write share one transaction. Note: an issued token keeps
/// carrying the old display name until it expires; denormalized names on
/// past reservations are historical and not rewritten.
pub async fn update_profile(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<UpdateProfileRequest>,
) -> AppResult<Json<DataResponse<PublicUser>>> {
    if let Some(username) = &input.username {
        validate_username(username).map_err(|e| AppError::Core(CoreError::Validation(e)))?;
    }

    let user = state
        .store
        .with_transaction(move |snapshot| {
            if let Some(username) = &input.username {
                if snapshot.username_taken(username, Some(&auth.user_id)) {
                    return Err(AppError::Core(CoreError::Validation(
                        "Username already exists".into(),
                    )));
                }
            }

            let user = snapshot
                .users
                .iter_mut()
                .find(|u| u.id == auth.user_id)
                .ok_or(AppError::Core(CoreError::NotFound {
                    entity: "User",
                    id: auth.user_id.clone(),
                }))?;

            if let Some(username) = input.username {
                user.username = username;
            }
            if let Some(avatar) = input.avatar {
                user.avatar = avatar;
            }
            Ok(user.public())
        })
        .await?;

    Ok(Json(DataResponse { data: user }))
}
