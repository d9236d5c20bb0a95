//! Handler for `POST /token` (bearer-token issuance).

use axum::extract::State;
use axum::{Form, Json};
use serde::{Deserialize, Serialize};
use songmap_core::error::CoreError;
use songmap_db::repositories::UserRepo;

use crate::auth::jwt::generate_access_token;
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Form body for `POST /token` (OAuth2 password-style).
#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    pub username: String,
    pub password: String,
}

/// Successful authentication response.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
}

/// POST /token
///
/// Exchange form-encoded username/password for a bearer token. Unknown
/// usernames and wrong passwords are indistinguishable to the caller.
pub async fn token(
    State(state): State<AppState>,
    Form(input): Form<TokenRequest>,
) -> AppResult<Json<TokenResponse>> {
    let user = UserRepo::find_by_username(&state.pool, &input.username)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid username or password".into(),
            ))
        })?;

    if user.disabled {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is disabled".into(),
        )));
    }

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid username or password".into(),
        )));
    }

    let access_token = generate_access_token(&user.username, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    Ok(Json(TokenResponse {
        access_token,
        token_type: "bearer",
    }))
}
