use crate::api::{ApiError, ErrorResponse};
use crate::auth::AuthUser;
use crate::models::Category;
use crate::schema::categories;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use diesel::prelude::*;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::CategoryResponse;

/// Only the name can change; an absent name leaves the row untouched.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateCategoryRequest {
    pub name: Option<String>,
}

#[utoipa::path(
    put,
    path = "/categories/{id}",
    tag = "categories",
    params(
        ("id" = Uuid, Path, description = "Category ID")
    ),
    request_body = UpdateCategoryRequest,
    responses(
        (status = 200, description = "Category updated successfully", body = CategoryResponse),
        (status = 400, description = "Invalid request (empty name)", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Category not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_category(
    AuthUser(_user): AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateCategoryRequest>,
) -> Result<Json<CategoryResponse>, ApiError> {
    if let Some(ref name) = request.name {
        if name.trim().is_empty() {
            return Err(ApiError::bad_request("Category name cannot be empty"));
        }
    }

    let mut conn = state.pool.get()?;

    let category: Category = categories::table
        .find(id)
        .select(Category::as_select())
        .first(&mut conn)
        .optional()?
        .ok_or_else(|| ApiError::not_found("Category not found"))?;

    let category = match request.name {
        Some(name) => diesel::update(categories::table.find(category.id))
            .set(categories::name.eq(name.trim()))
            .returning(Category::as_returning())
            .get_result(&mut conn)?,
        None => category,
    };

    Ok(Json(CategoryResponse::from(category)))
}
