//! Handlers for creating and querying song points.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use songmap_core::types::DbId;
use songmap_db::models::song_point::{CreateSongPoint, SongPointResponse};
use songmap_db::repositories::SongPointRepo;

use crate::error::{validate_payload, AppResult};
use crate::middleware::auth::{ensure_owner, CurrentUser};
use crate::query::RadiusParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /users/me/songpoints
///
/// Create loose points for the calling user (JSON array, all-or-nothing).
pub async fn create_for_me(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(input): Json<Vec<CreateSongPoint>>,
) -> AppResult<impl IntoResponse> {
    create_points(&state, input, user.0.id).await
}

/// POST /users/{owner_id}/songpoints
///
/// Create loose points for a path-addressed owner. The owner must be the
/// calling user.
pub async fn create_for_owner(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(owner_id): Path<DbId>,
    Json(input): Json<Vec<CreateSongPoint>>,
) -> AppResult<impl IntoResponse> {
    ensure_owner(owner_id, &user.0)?;
    create_points(&state, input, owner_id).await
}

/// GET /songpoints?longitude=&latitude=&radius=&skip=&limit=
///
/// All points (any owner) within `radius` meters of the center, paginated
/// after the distance filter.
pub async fn within_radius(
    State(state): State<AppState>,
    _user: CurrentUser,
    Query(params): Query<RadiusParams>,
) -> AppResult<Json<DataResponse<Vec<SongPointResponse>>>> {
    validate_payload(&params)?;

    let points = SongPointRepo::within_radius(
        &state.pool,
        params.longitude,
        params.latitude,
        params.radius,
        params.skip,
        params.limit,
    )
    .await?;

    Ok(Json(DataResponse {
        data: points.into_iter().map(SongPointResponse::from).collect(),
    }))
}

/// Shared create path for both the `me` and owner-addressed routes.
async fn create_points(
    state: &AppState,
    input: Vec<CreateSongPoint>,
    owner_id: DbId,
) -> AppResult<impl IntoResponse> {
    for point in &input {
        validate_payload(point)?;
    }

    let points = SongPointRepo::create_many_for_owner(&state.pool, &input, owner_id).await?;

    let data: Vec<SongPointResponse> = points.into_iter().map(SongPointResponse::from).collect();
    Ok((StatusCode::CREATED, Json(DataResponse { data })))
}
