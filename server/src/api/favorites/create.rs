use crate::api::{ApiError, ErrorResponse};
use crate::auth::AuthUser;
use crate::models::{Favorite, NewFavorite};
use crate::schema::favorites;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use diesel::prelude::*;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::FavoriteResponse;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateFavoriteRequest {
    pub recipe_id: Uuid,
}

#[utoipa::path(
    post,
    path = "/favorites",
    tag = "favorites",
    request_body = CreateFavoriteRequest,
    responses(
        (status = 201, description = "Favorite created successfully", body = FavoriteResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse),
        (status = 409, description = "Recipe already favorited", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_favorite(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Json(request): Json<CreateFavoriteRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let mut conn = state.pool.get()?;

    // No existence pre-check on the recipe; the foreign key reports it
    let favorite: Favorite = diesel::insert_into(favorites::table)
        .values(&NewFavorite {
            user_id: user.id,
            recipe_id: request.recipe_id,
        })
        .returning(Favorite::as_returning())
        .get_result(&mut conn)
        .map_err(|err| match err {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::ForeignKeyViolation,
                _,
            ) => ApiError::not_found("Recipe not found"),
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UniqueViolation,
                _,
            ) => ApiError::conflict("Recipe is already favorited"),
            err => err.into(),
        })?;

    Ok((StatusCode::CREATED, Json(FavoriteResponse::from(favorite))))
}
