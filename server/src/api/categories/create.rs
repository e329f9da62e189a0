use crate::api::{ApiError, ErrorResponse};
use crate::auth::AuthUser;
use crate::models::{Category, NewCategory};
use crate::schema::categories;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use diesel::prelude::*;
use serde::Deserialize;
use utoipa::ToSchema;

use super::CategoryResponse;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateCategoryRequest {
    pub name: String,
    pub description: Option<String>,
}

#[utoipa::path(
    post,
    path = "/categories",
    tag = "categories",
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Category created successfully", body = CategoryResponse),
        (status = 400, description = "Invalid request (empty name)", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_category(
    AuthUser(_user): AuthUser,
    State(state): State<AppState>,
    Json(request): Json<CreateCategoryRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let name = request.name.trim();
    if name.is_empty() {
        return Err(ApiError::bad_request("Category name cannot be empty"));
    }

    let mut conn = state.pool.get()?;

    let category: Category = diesel::insert_into(categories::table)
        .values(&NewCategory {
            name,
            description: request.description.as_deref(),
        })
        .returning(Category::as_returning())
        .get_result(&mut conn)?;

    Ok((StatusCode::CREATED, Json(CategoryResponse::from(category))))
}
