//! Handlers for the `/notifications` resource.
//!
//! All endpoints require authentication and are strictly owner-scoped: a
//! notification is visible to the user id it targets, plus -- for records
//! addressed to the chef channel -- the chef account. Requests for records
//! outside that set answer 404, never 403, so ids cannot be probed.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use patisserie_core::error::CoreError;
use patisserie_core::identity::CHEF_CHANNEL;
use patisserie_core::model::Notification;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Whether a notification targeted at `target` is visible to `auth`.
fn owns(auth: &AuthUser, target: &str) -> bool {
    target == auth.user_id || (target == CHEF_CHANNEL && auth.identity().is_chef())
}

/// GET /api/v1/notifications
///
/// List the authenticated user's notifications, newest first.
pub async fn list_notifications(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Notification>>>> {
    let snapshot = state.store.read().await;

    let mut notifications: Vec<Notification> = snapshot
        .notifications
        .into_iter()
        .filter(|n| owns(&auth, &n.user_id))
        .collect();
    notifications.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    Ok(Json(DataResponse {
        data: notifications,
    }))
}

/// GET /api/v1/notifications/unread-count
pub async fn unread_count(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<serde_json::Value>> {
    let snapshot = state.store.read().await;
    let count = snapshot
        .notifications
        .iter()
        .filter(|n| owns(&auth, &n.user_id) && !n.read)
        .count();

    Ok(Json(serde_json::json!({ "data": { "count": count } })))
}

/// POST /api/v1/notifications/{id}/read
///
/// Mark a single notification as read. 404 if it does not exist or does
/// not belong to the authenticated user.
pub async fn mark_read(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(notification_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    state
        .store
        .with_transaction(move |snapshot| -> Result<(), AppError> {
            let notification = snapshot
                .notification_mut(&notification_id)
                .filter(|n| owns(&auth, &n.user_id))
                .ok_or(AppError::Core(CoreError::NotFound {
                    entity: "Notification",
                    id: notification_id.clone(),
                }))?;
            notification.read = true;
            Ok(())
        })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/notifications/{id}
///
/// Delete a notification owned by the authenticated user. 404 otherwise.
pub async fn delete_notification(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(notification_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    state
        .store
        .with_transaction(move |snapshot| {
            let owned = snapshot
                .notification(&notification_id)
                .is_some_and(|n| owns(&auth, &n.user_id));
            if !owned {
                return Err(AppError::Core(CoreError::NotFound {
                    entity: "Notification",
                    id: notification_id.clone(),
                }));
            }
            snapshot.notifications.retain(|n| n.id != notification_id);
            Ok(())
        })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
