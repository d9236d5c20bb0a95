//! Handlers for the `/users` resource (registration and lookups).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use songmap_core::error::CoreError;
use songmap_core::types::DbId;
use songmap_db::models::user::{CreateUser, UserResponse};
use songmap_db::repositories::UserRepo;
use validator::Validate;

use crate::auth::password::hash_password;
use crate::error::{validate_payload, AppError, AppResult};
use crate::middleware::auth::CurrentUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /users/new`.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 64))]
    pub username: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8, max = 128))]
    pub password: String,
}

/// POST /users/new
///
/// Register a new account. Public -- this is the only way users come into
/// existence. A taken username yields 409.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<impl IntoResponse> {
    validate_payload(&input)?;

    // Pre-check for a clean message; the uq_users_username constraint still
    // backstops concurrent registrations.
    if UserRepo::find_by_username(&state.pool, &input.username)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(
            "Username is already taken".into(),
        )));
    }

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            username: input.username,
            email: input.email,
            password_hash,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, "registered new user");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: UserResponse::from(user),
        }),
    ))
}

/// GET /users/me
///
/// Fetch the calling user.
pub async fn me(user: CurrentUser) -> AppResult<Json<DataResponse<UserResponse>>> {
    Ok(Json(DataResponse {
        data: UserResponse::from(user.0),
    }))
}

/// GET /users/{id}
///
/// Fetch any user by id. Requires a valid token but no specific identity.
pub async fn get(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;

    Ok(Json(DataResponse {
        data: UserResponse::from(user),
    }))
}
