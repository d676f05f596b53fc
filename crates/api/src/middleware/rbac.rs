//! Role-based access control extractors.
//!
//! The only privileged granularity in this system is "chef-only": deciding
//! reservations and editing the cake catalogue. Everything else is scoped
//! per-identity inside the handlers themselves.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use patisserie_core::error::CoreError;
use patisserie_core::identity::ROLE_CHEF;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires the `chef` role. Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn chef_only(RequireChef(user): RequireChef) -> AppResult<Json<()>> {
///     // user is guaranteed to be the chef here
///     Ok(Json(()))
/// }
/// ```
pub struct RequireChef(pub AuthUser);

impl FromRequestParts<AppState> for RequireChef {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if user.role != ROLE_CHEF {
            return Err(AppError::Core(CoreError::Forbidden(
                "Chef role required".into(),
            )));
        }
        Ok(RequireChef(user))
    }
}
