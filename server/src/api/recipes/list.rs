use crate::api::{ApiError, ErrorResponse};
use crate::auth::AuthUser;
use crate::models::Recipe;
use crate::schema::recipes;
use crate::state::AppState;
use axum::{extract::State, Json};
use diesel::prelude::*;

use super::relations::{self, RecipeResponse};

#[utoipa::path(
    get,
    path = "/recipes",
    tag = "recipes",
    responses(
        (status = 200, description = "The acting user's recipes with relations", body = Vec<RecipeResponse>),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_recipes(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<RecipeResponse>>, ApiError> {
    let mut conn = state.pool.get()?;

    let rows: Vec<Recipe> = recipes::table
        .filter(recipes::user_id.eq(user.id))
        .order(recipes::created_at.desc())
        .select(Recipe::as_select())
        .load(&mut conn)?;

    let response = relations::load_recipe_graphs(&mut conn, rows)?;

    Ok(Json(response))
}
