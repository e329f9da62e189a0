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
use uuid::Uuid;

use super::CategoryResponse;

#[utoipa::path(
    get,
    path = "/categories/{id}",
    tag = "categories",
    params(
        ("id" = Uuid, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category details", body = CategoryResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Category not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_category(
    AuthUser(_user): AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CategoryResponse>, ApiError> {
    let mut conn = state.pool.get()?;

    let category: Category = categories::table
        .find(id)
        .select(Category::as_select())
        .first(&mut conn)
        .optional()?
        .ok_or_else(|| ApiError::not_found("Category not found"))?;

    Ok(Json(CategoryResponse::from(category)))
}
