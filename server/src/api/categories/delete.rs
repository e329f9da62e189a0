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
    delete,
    path = "/categories/{id}",
    tag = "categories",
    params(
        ("id" = Uuid, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Deleted category", body = CategoryResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Category not found", body = ErrorResponse),
        (status = 409, description = "Category still referenced by recipes", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_category(
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

    // recipe_categories restricts the delete while links exist; surface that
    // as a distinguishable "still referenced" conflict.
    diesel::delete(categories::table.find(category.id))
        .execute(&mut conn)
        .map_err(|err| match err {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::ForeignKeyViolation,
                _,
            ) => ApiError::referenced(
                "Category is still referenced by recipes; remove it from those recipes first",
            ),
            err => err.into(),
        })?;

    Ok(Json(CategoryResponse::from(category)))
}
