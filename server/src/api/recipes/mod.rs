pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod relations;
pub mod update;

use crate::api::ApiError;
use crate::models::Recipe;
use crate::state::AppState;
use axum::routing::get;
use axum::Router;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};
use uuid::Uuid;

/// Returns the router for /recipes endpoints (mounted at /recipes)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list::list_recipes).post(create::create_recipe))
        .route(
            "/{id}",
            get(get::get_recipe)
                .put(update::update_recipe)
                .delete(delete::delete_recipe),
        )
}

/// Scalar recipe fields, without relations. Used where a recipe is embedded
/// in another resource's response.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecipeSummary {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub steps: Vec<String>,
    pub cook_time_minutes: i32,
    pub photo_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Recipe> for RecipeSummary {
    fn from(recipe: Recipe) -> Self {
        RecipeSummary {
            id: recipe.id,
            user_id: recipe.user_id,
            title: recipe.title,
            steps: recipe.steps.into_iter().flatten().collect(),
            cook_time_minutes: recipe.cook_time_minutes,
            photo_url: recipe.photo_url,
            created_at: recipe.created_at,
            updated_at: recipe.updated_at,
        }
    }
}

pub(super) fn validate_title(title: &str) -> Result<(), ApiError> {
    if title.trim().is_empty() {
        return Err(ApiError::bad_request("Title cannot be empty"));
    }
    Ok(())
}

pub(super) fn validate_cook_time(cook_time_minutes: i32) -> Result<(), ApiError> {
    if cook_time_minutes < 0 {
        return Err(ApiError::bad_request("Cook time cannot be negative"));
    }
    Ok(())
}

#[derive(OpenApi)]
#[openapi(
    paths(
        create::create_recipe,
        list::list_recipes,
        get::get_recipe,
        update::update_recipe,
        delete::delete_recipe,
    ),
    components(schemas(
        create::CreateRecipeRequest,
        update::UpdateRecipeRequest,
        relations::RecipeResponse,
        RecipeSummary,
    ))
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_title_rejected() {
        assert!(validate_title("").is_err());
        assert!(validate_title("   ").is_err());
        assert!(validate_title("Shakshuka").is_ok());
    }

    #[test]
    fn test_negative_cook_time_rejected() {
        assert!(validate_cook_time(-1).is_err());
        assert!(validate_cook_time(0).is_ok());
        assert!(validate_cook_time(45).is_ok());
    }
}
