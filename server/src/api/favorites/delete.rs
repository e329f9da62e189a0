use crate::api::{ApiError, ErrorResponse};
use crate::auth::AuthUser;
use crate::models::Favorite;
use crate::schema::favorites;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use diesel::prelude::*;
use uuid::Uuid;

use super::FavoriteResponse;

#[utoipa::path(
    delete,
    path = "/favorites/{id}",
    tag = "favorites",
    params(
        ("id" = Uuid, Path, description = "Favorite ID")
    ),
    responses(
        (status = 200, description = "Deleted favorite", body = FavoriteResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Favorite not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_favorite(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<FavoriteResponse>, ApiError> {
    let mut conn = state.pool.get()?;

    let favorite: Favorite = diesel::delete(
        favorites::table
            .filter(favorites::id.eq(id))
            .filter(favorites::user_id.eq(user.id)),
    )
    .returning(Favorite::as_returning())
    .get_result(&mut conn)
    .optional()?
    .ok_or_else(|| ApiError::not_found("Favorite not found"))?;

    Ok(Json(FavoriteResponse::from(favorite)))
}
