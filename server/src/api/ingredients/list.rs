use crate::api::{ApiError, ErrorResponse};
use crate::auth::AuthUser;
use crate::models::Ingredient;
use crate::schema::ingredients;
use crate::state::AppState;
use axum::{extract::State, Json};
use diesel::prelude::*;

use super::IngredientResponse;

#[utoipa::path(
    get,
    path = "/ingredients",
    tag = "ingredients",
    responses(
        (status = 200, description = "All ingredients", body = Vec<IngredientResponse>),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_ingredients(
    AuthUser(_user): AuthUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<IngredientResponse>>, ApiError> {
    let mut conn = state.pool.get()?;

    let rows: Vec<Ingredient> = ingredients::table
        .order(ingredients::name.asc())
        .select(Ingredient::as_select())
        .load(&mut conn)?;

    Ok(Json(rows.into_iter().map(IngredientResponse::from).collect()))
}
