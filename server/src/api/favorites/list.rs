use crate::api::recipes::RecipeSummary;
use crate::api::{ApiError, ErrorResponse};
use crate::auth::AuthUser;
use crate::models::{Favorite, Recipe};
use crate::schema::{favorites, recipes};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FavoriteWithRecipe {
    pub id: Uuid,
    pub user_id: Uuid,
    pub recipe_id: Uuid,
    pub created_at: DateTime<Utc>,
    /// The favorited recipe, eagerly included
    pub recipe: RecipeSummary,
}

#[utoipa::path(
    get,
    path = "/favorites/user/{user_id}",
    tag = "favorites",
    params(
        ("user_id" = Uuid, Path, description = "User ID; must be the acting user")
    ),
    responses(
        (status = 200, description = "The user's favorites with their recipes", body = Vec<FavoriteWithRecipe>),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "No favorites visible for this user", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_favorites(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Vec<FavoriteWithRecipe>>, ApiError> {
    // Favorites are private; another user's list is indistinguishable from a
    // missing one.
    if user_id != user.id {
        return Err(ApiError::not_found("No favorites found for this user"));
    }

    let mut conn = state.pool.get()?;

    let rows: Vec<(Favorite, Recipe)> = favorites::table
        .inner_join(recipes::table)
        .filter(favorites::user_id.eq(user.id))
        .order(favorites::created_at.desc())
        .select((Favorite::as_select(), Recipe::as_select()))
        .load(&mut conn)?;

    let response = rows
        .into_iter()
        .map(|(favorite, recipe)| FavoriteWithRecipe {
            id: favorite.id,
            user_id: favorite.user_id,
            recipe_id: favorite.recipe_id,
            created_at: favorite.created_at,
            recipe: RecipeSummary::from(recipe),
        })
        .collect();

    Ok(Json(response))
}
