//! Handlers for the `/auth` resource (signup, login, me).

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use patisserie_core::error::CoreError;
use patisserie_core::identity::{Identity, ROLE_CUSTOMER};
use patisserie_core::model::user::{validate_username, PublicUser, DEFAULT_AVATAR};
use patisserie_core::model::User;
use patisserie_core::types::{new_id, now};

use crate::auth::jwt::generate_access_token;
use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/signup` and `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub username: String,
    pub password: String,
}

/// Successful authentication response.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: PublicUser,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/signup
///
/// Create a customer account. The username uniqueness check and the user
/// append run in one transaction so two concurrent signups cannot both
/// claim the same name.
pub async fn signup(
    State(state): State<AppState>,
    Json(input): Json<CredentialsRequest>,
) -> AppResult<Json<AuthResponse>> {
    validate_username(&input.username)
        .map_err(|e| AppError::Core(CoreError::Validation(e)))?;
    validate_password_strength(&input.password)
        .map_err(|e| AppError::Core(CoreError::Validation(e)))?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::Internal(format!("Password hashing error: {e}")))?;

    let username = input.username.clone();
    let user = state
        .store
        .with_transaction(move |snapshot| {
            if snapshot.username_taken(&username, None) {
                return Err(AppError::Core(CoreError::Validation(
                    "Username already exists".into(),
                )));
            }
            let user = User {
                id: new_id(),
                username,
                password_hash,
                role: ROLE_CUSTOMER.to_string(),
                avatar: DEFAULT_AVATAR.to_string(),
                created_at: now(),
            };
            snapshot.users.push(user.clone());
            Ok(user)
        })
        .await?;

    tracing::info!(user_id = %user.id, username = %user.username, "Account created");
    auth_response(&state, &user)
}

/// POST /api/v1/auth/login
///
/// Authenticate with username + password. Read-only: verifies against the
/// last-committed snapshot.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<CredentialsRequest>,
) -> AppResult<Json<AuthResponse>> {
    let snapshot = state.store.read().await;

    let user = snapshot
        .user_by_username(&input.username)
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid username or password".into(),
            ))
        })?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::Internal(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid username or password".into(),
        )));
    }

    tracing::info!(user_id = %user.id, "Login");
    auth_response(&state, user)
}

/// GET /api/v1/auth/me
///
/// Return the account behind the presented token.
pub async fn me(auth: AuthUser, State(state): State<AppState>) -> AppResult<Json<PublicUser>> {
    let snapshot = state.store.read().await;
    let user = snapshot.user(&auth.user_id).ok_or(AppError::Core(CoreError::NotFound {
        entity: "User",
        id: auth.user_id.clone(),
    }))?;
    Ok(Json(user.public()))
}

/// Build the token + user payload shared by signup and login.
fn auth_response(state: &AppState, user: &User) -> AppResult<Json<AuthResponse>> {
    let identity = Identity {
        id: user.id.clone(),
        display_name: user.username.clone(),
        role: user.role.clone(),
    };
    let access_token = generate_access_token(&identity, &state.config.jwt)
        .map_err(|e| AppError::Internal(format!("Token generation error: {e}")))?;

    Ok(Json(AuthResponse {
        access_token,
        expires_in: state.config.jwt.access_token_expiry_mins * 60,
        user: user.public(),
    }))
}
