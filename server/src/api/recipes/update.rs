use crate::api::{ApiError, ErrorResponse};
use crate::auth::AuthUser;
use crate::models::{Recipe, RecipeChanges};
use crate::schema::{recipe_categories, recipe_ingredients, recipes};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use diesel::prelude::*;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::relations::{self, RecipeResponse};
use super::{validate_cook_time, validate_title};

/// Partial update: only keys present in the body change anything. An empty
/// `ingredient_ids`/`category_ids` array clears the links; an absent key
/// leaves them untouched.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateRecipeRequest {
    pub title: Option<String>,
    pub steps: Option<Vec<String>>,
    pub cook_time_minutes: Option<i32>,
    pub photo_url: Option<String>,
    pub ingredient_ids: Option<Vec<Uuid>>,
    pub category_ids: Option<Vec<Uuid>>,
}

#[utoipa::path(
    put,
    path = "/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = Uuid, Path, description = "Recipe ID")
    ),
    request_body = UpdateRecipeRequest,
    responses(
        (status = 200, description = "Updated recipe with relations", body = RecipeResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_recipe(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateRecipeRequest>,
) -> Result<Json<RecipeResponse>, ApiError> {
    if let Some(ref title) = request.title {
        validate_title(title)?;
    }
    if let Some(cook_time_minutes) = request.cook_time_minutes {
        validate_cook_time(cook_time_minutes)?;
    }

    let steps: Option<Vec<Option<String>>> = request
        .steps
        .map(|steps| steps.into_iter().map(Some).collect());

    let mut conn = state.pool.get()?;

    let response = conn.transaction::<RecipeResponse, ApiError, _>(|conn| {
        let recipe: Recipe = recipes::table
            .filter(recipes::id.eq(id))
            .filter(recipes::user_id.eq(user.id))
            .select(Recipe::as_select())
            .first(conn)
            .optional()?
            .ok_or_else(|| ApiError::not_found("Recipe not found"))?;

        let changes = RecipeChanges {
            title: request.title.as_deref(),
            steps: steps.as_deref(),
            cook_time_minutes: request.cook_time_minutes,
            photo_url: request.photo_url.as_deref(),
        };

        diesel::update(recipes::table.find(recipe.id))
            .set((&changes, recipes::updated_at.eq(diesel::dsl::now)))
            .execute(conn)?;

        // Present arrays replace the whole link set
        if let Some(ref ingredient_ids) = request.ingredient_ids {
            diesel::delete(
                recipe_ingredients::table.filter(recipe_ingredients::recipe_id.eq(recipe.id)),
            )
            .execute(conn)?;
            relations::link_ingredients(conn, recipe.id, ingredient_ids)?;
        }

        if let Some(ref category_ids) = request.category_ids {
            diesel::delete(
                recipe_categories::table.filter(recipe_categories::recipe_id.eq(recipe.id)),
            )
            .execute(conn)?;
            relations::link_categories(conn, recipe.id, category_ids)?;
        }

        let updated: Recipe = recipes::table
            .find(recipe.id)
            .select(Recipe::as_select())
            .first(conn)?;

        relations::load_recipe_graph(conn, updated).map_err(ApiError::from)
    })?;

    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_fields_stay_none() {
        let request: UpdateRecipeRequest = serde_json::from_str("{}").unwrap();
        assert!(request.title.is_none());
        assert!(request.steps.is_none());
        assert!(request.cook_time_minutes.is_none());
        assert!(request.photo_url.is_none());
        assert!(request.ingredient_ids.is_none());
        assert!(request.category_ids.is_none());
    }

    #[test]
    fn test_empty_array_is_distinct_from_absent() {
        let request: UpdateRecipeRequest =
            serde_json::from_str(r#"{"ingredient_ids": []}"#).unwrap();
        // Present-but-empty must clear the links, so it deserializes as
        // Some(vec![]), never None.
        assert_eq!(request.ingredient_ids, Some(vec![]));
        assert!(request.category_ids.is_none());
    }

    #[test]
    fn test_partial_update_deserializes_only_given_fields() {
        let request: UpdateRecipeRequest =
            serde_json::from_str(r#"{"title": "X", "cook_time_minutes": 20}"#).unwrap();
        assert_eq!(request.title.as_deref(), Some("X"));
        assert_eq!(request.cook_time_minutes, Some(20));
        assert!(request.steps.is_none());
        assert!(request.ingredient_ids.is_none());
    }
}
