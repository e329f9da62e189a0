use crate::api::{ApiError, ErrorResponse};
use crate::auth::AuthUser;
use crate::models::Recipe;
use crate::schema::{favorites, recipe_categories, recipe_ingredients, recipes};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use diesel::prelude::*;
use uuid::Uuid;

use super::relations::{self, RecipeResponse};

#[utoipa::path(
    delete,
    path = "/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = Uuid, Path, description = "Recipe ID")
    ),
    responses(
        (status = 200, description = "Deleted recipe", body = RecipeResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_recipe(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RecipeResponse>, ApiError> {
    let mut conn = state.pool.get()?;

    // Favorites, link rows, and the recipe go in one transaction so a failure
    // partway leaves no orphans.
    let response = conn.transaction::<RecipeResponse, ApiError, _>(|conn| {
        let recipe: Recipe = recipes::table
            .filter(recipes::id.eq(id))
            .filter(recipes::user_id.eq(user.id))
            .select(Recipe::as_select())
            .first(conn)
            .optional()?
            .ok_or_else(|| ApiError::not_found("Recipe not found"))?;

        diesel::delete(favorites::table.filter(favorites::recipe_id.eq(recipe.id)))
            .execute(conn)?;

        // Snapshot taken after the favorites are gone, matching what callers
        // see once the delete lands
        let graph = relations::load_recipe_graph(conn, recipe)?;

        diesel::delete(
            recipe_ingredients::table.filter(recipe_ingredients::recipe_id.eq(graph.id)),
        )
        .execute(conn)?;
        diesel::delete(
            recipe_categories::table.filter(recipe_categories::recipe_id.eq(graph.id)),
        )
        .execute(conn)?;
        diesel::delete(recipes::table.find(graph.id)).execute(conn)?;

        Ok(graph)
    })?;

    Ok(Json(response))
}
