pub mod create;
pub mod list;

use crate::models::Ingredient;
use crate::state::AppState;
use axum::routing::get;
use axum::Router;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};
use uuid::Uuid;

/// Returns the router for /ingredients endpoints (mounted at /ingredients)
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(list::list_ingredients).post(create::create_ingredient),
    )
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct IngredientResponse {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<Ingredient> for IngredientResponse {
    fn from(ingredient: Ingredient) -> Self {
        IngredientResponse {
            id: ingredient.id,
            name: ingredient.name,
            created_at: ingredient.created_at,
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(create::create_ingredient, list::list_ingredients),
    components(schemas(create::CreateIngredientRequest, IngredientResponse))
)]
pub struct ApiDoc;
