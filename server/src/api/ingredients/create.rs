use crate::api::{ApiError, ErrorResponse};
use crate::auth::AuthUser;
use crate::models::{Ingredient, NewIngredient};
use crate::schema::ingredients;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use diesel::prelude::*;
use serde::Deserialize;
use utoipa::ToSchema;

use super::IngredientResponse;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateIngredientRequest {
    pub name: String,
}

#[utoipa::path(
    post,
    path = "/ingredients",
    tag = "ingredients",
    request_body = CreateIngredientRequest,
    responses(
        (status = 201, description = "Ingredient created successfully", body = IngredientResponse),
        (status = 400, description = "Invalid request (empty name)", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_ingredient(
    AuthUser(_user): AuthUser,
    State(state): State<AppState>,
    Json(request): Json<CreateIngredientRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let name = request.name.trim();
    if name.is_empty() {
        return Err(ApiError::bad_request("Ingredient name cannot be empty"));
    }

    let mut conn = state.pool.get()?;

    // Duplicate names are tolerated; ingredients are append-only
    let ingredient: Ingredient = diesel::insert_into(ingredients::table)
        .values(&NewIngredient { name })
        .returning(Ingredient::as_returning())
        .get_result(&mut conn)?;

    Ok((
        StatusCode::CREATED,
        Json(IngredientResponse::from(ingredient)),
    ))
}
