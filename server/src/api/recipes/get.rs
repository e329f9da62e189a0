use crate::api::{ApiError, ErrorResponse};
use crate::auth::AuthUser;
use crate::models::Recipe;
use crate::schema::recipes;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use diesel::prelude::*;
use uuid::Uuid;

use super::relations::{self, RecipeResponse};

#[utoipa::path(
    get,
    path = "/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = Uuid, Path, description = "Recipe ID")
    ),
    responses(
        (status = 200, description = "Recipe with relations", body = RecipeResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_recipe(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RecipeResponse>, ApiError> {
    let mut conn = state.pool.get()?;

    // Another user's recipe 404s the same as a missing one
    let recipe: Recipe = recipes::table
        .filter(recipes::id.eq(id))
        .filter(recipes::user_id.eq(user.id))
        .select(Recipe::as_select())
        .first(&mut conn)
        .optional()?
        .ok_or_else(|| ApiError::not_found("Recipe not found"))?;

    Ok(Json(relations::load_recipe_graph(&mut conn, recipe)?))
}
