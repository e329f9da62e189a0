pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use crate::models::Category;
use crate::state::AppState;
use axum::routing::get;
use axum::Router;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};
use uuid::Uuid;

/// Returns the router for /categories endpoints (mounted at /categories)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list::list_categories).post(create::create_category))
        .route(
            "/{id}",
            get(get::get_category)
                .put(update::update_category)
                .delete(delete::delete_category),
        )
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CategoryResponse {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        CategoryResponse {
            id: category.id,
            name: category.name,
            description: category.description,
            created_at: category.created_at,
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        create::create_category,
        list::list_categories,
        get::get_category,
        update::update_category,
        delete::delete_category,
    ),
    components(schemas(
        create::CreateCategoryRequest,
        update::UpdateCategoryRequest,
        CategoryResponse,
    ))
)]
pub struct ApiDoc;
