//! Bearer-token authentication extractor and the ownership guard.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use songmap_core::error::CoreError;
use songmap_core::types::DbId;
use songmap_db::models::user::User;
use songmap_db::repositories::UserRepo;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// The calling user, resolved from the `Authorization: Bearer <token>`
/// header.
///
/// Token verification checks signature and expiry, then the `sub` username
/// is looked up so a deleted or renamed account cannot keep using an old
/// token. Use as an extractor parameter in any handler that requires
/// authentication:
///
/// ```ignore
/// async fn my_handler(user: CurrentUser) -> AppResult<Json<()>> {
///     tracing::debug!(user_id = user.0.id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let claims = validate_token(token, &state.config.jwt).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        let user = UserRepo::find_by_username(&state.pool, &claims.sub)
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Token subject no longer exists".into(),
                ))
            })?;

        if user.disabled {
            return Err(AppError::Core(CoreError::Forbidden(
                "Account is disabled".into(),
            )));
        }

        Ok(CurrentUser(user))
    }
}

/// Reject with 401 when a path-addressed owner is not the calling user.
///
/// Owner-scoped endpoints (`/users/{owner_id}/...` mutations) may only be
/// exercised by that owner; a valid token for a different account is not
/// enough.
pub fn ensure_owner(owner_id: DbId, user: &User) -> Result<(), AppError> {
    if owner_id != user.id {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Trying to access unauthorized content".into(),
        )));
    }
    Ok(())
}
