pub mod create;
pub mod delete;
pub mod list;

use crate::models::Favorite;
use crate::state::AppState;
use axum::routing::{delete, get, post};
use axum::Router;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};
use uuid::Uuid;

/// Returns the router for /favorites endpoints (mounted at /favorites)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create::create_favorite))
        .route("/user/{user_id}", get(list::list_favorites))
        .route("/{id}", delete(delete::delete_favorite))
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FavoriteResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub recipe_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<Favorite> for FavoriteResponse {
    fn from(favorite: Favorite) -> Self {
        FavoriteResponse {
            id: favorite.id,
            user_id: favorite.user_id,
            recipe_id: favorite.recipe_id,
            created_at: favorite.created_at,
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        create::create_favorite,
        list::list_favorites,
        delete::delete_favorite,
    ),
    components(schemas(
        create::CreateFavoriteRequest,
        list::FavoriteWithRecipe,
        FavoriteResponse,
    ))
)]
pub struct ApiDoc;
