use crate::api::{ApiError, ErrorResponse};
use crate::auth::AuthUser;
use crate::models::Category;
use crate::schema::categories;
use crate::state::AppState;
use axum::{extract::State, Json};
use diesel::prelude::*;

use super::CategoryResponse;

#[utoipa::path(
    get,
    path = "/categories",
    tag = "categories",
    responses(
        (status = 200, description = "All categories", body = Vec<CategoryResponse>),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_categories(
    AuthUser(_user): AuthUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<CategoryResponse>>, ApiError> {
    let mut conn = state.pool.get()?;

    let rows: Vec<Category> = categories::table
        .order(categories::name.asc())
        .select(Category::as_select())
        .load(&mut conn)?;

    Ok(Json(rows.into_iter().map(CategoryResponse::from).collect()))
}
