use crate::api::{ApiError, ErrorResponse};
use crate::auth::{issue_token, verify_password};
use crate::models::User;
use crate::schema::users;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// One message for both unknown email and wrong password, so a caller cannot
/// probe which addresses are registered.
const INVALID_CREDENTIALS: &str = "Invalid credentials";

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LoginUser {
    pub id: Uuid,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LoginResponse {
    pub access_token: String,
    pub user: LoginUser,
}

#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "auth",
    request_body(content = LoginRequest, example = json!({"email": "cook@example.com", "password": "password"})),
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse)
    )
)]
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let mut conn = state.pool.get()?;

    let user: Option<User> = users::table
        .filter(users::email.eq(&req.email))
        .select(User::as_select())
        .first(&mut conn)
        .optional()?;

    let Some(user) = user else {
        return Err(ApiError::unauthorized(INVALID_CREDENTIALS));
    };

    if !verify_password(&req.password, &user.password_hash) {
        return Err(ApiError::unauthorized(INVALID_CREDENTIALS));
    }

    let access_token = issue_token(
        user.id,
        &user.email,
        &state.config.token_secret,
        state.config.token_expiry_secs,
    )
    .map_err(|err| ApiError::internal(format!("failed to sign token: {err}")))?;

    Ok(Json(LoginResponse {
        access_token,
        user: LoginUser {
            id: user.id,
            email: user.email,
            created_at: user.created_at,
        },
    }))
}
