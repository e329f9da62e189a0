use crate::api::{ApiError, ErrorResponse};
use crate::auth::AuthUser;
use crate::models::{NewRecipe, Recipe};
use crate::schema::recipes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use diesel::prelude::*;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::relations::{self, RecipeResponse};
use super::{validate_cook_time, validate_title};

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateRecipeRequest {
    pub title: String,
    /// Preparation steps; order is preserved as given
    pub steps: Vec<String>,
    pub cook_time_minutes: i32,
    pub photo_url: Option<String>,
    #[serde(default)]
    pub ingredient_ids: Vec<Uuid>,
    #[serde(default)]
    pub category_ids: Vec<Uuid>,
}

#[utoipa::path(
    post,
    path = "/recipes",
    tag = "recipes",
    request_body = CreateRecipeRequest,
    responses(
        (status = 201, description = "Recipe created successfully", body = RecipeResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "An ingredient or category id does not exist", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_recipe(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Json(request): Json<CreateRecipeRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_title(&request.title)?;
    validate_cook_time(request.cook_time_minutes)?;

    let steps: Vec<Option<String>> = request.steps.into_iter().map(Some).collect();

    let mut conn = state.pool.get()?;

    // Recipe row and link rows land atomically; a bad link id rolls back the
    // whole create.
    let response = conn.transaction::<RecipeResponse, ApiError, _>(|conn| {
        let recipe: Recipe = diesel::insert_into(recipes::table)
            .values(&NewRecipe {
                user_id: user.id,
                title: &request.title,
                steps: &steps,
                cook_time_minutes: request.cook_time_minutes,
                photo_url: request.photo_url.as_deref(),
            })
            .returning(Recipe::as_returning())
            .get_result(conn)?;

        relations::link_ingredients(conn, recipe.id, &request.ingredient_ids)?;
        relations::link_categories(conn, recipe.id, &request.category_ids)?;

        relations::load_recipe_graph(conn, recipe).map_err(ApiError::from)
    })?;

    Ok((StatusCode::CREATED, Json(response)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_link_ids_default_to_empty() {
        let request: CreateRecipeRequest = serde_json::from_str(
            r#"{"title": "Toast", "steps": ["toast the bread"], "cook_time_minutes": 5}"#,
        )
        .unwrap();
        assert!(request.ingredient_ids.is_empty());
        assert!(request.category_ids.is_empty());
        assert!(request.photo_url.is_none());
    }

    #[test]
    fn test_non_numeric_cook_time_rejected_at_deserialization() {
        let result = serde_json::from_str::<CreateRecipeRequest>(
            r#"{"title": "Toast", "steps": [], "cook_time_minutes": "five"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_step_order_is_preserved() {
        let request: CreateRecipeRequest = serde_json::from_str(
            r#"{"title": "Tea", "steps": ["boil water", "steep", "pour"], "cook_time_minutes": 4}"#,
        )
        .unwrap();
        assert_eq!(request.steps, ["boil water", "steep", "pour"]);
    }
}
