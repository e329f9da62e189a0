use crate::api::{ApiError, ErrorResponse};
use crate::auth::hash_password;
use crate::models::{NewUser, User};
use crate::schema::users;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
}

/// Public user fields only; the password hash never leaves the service.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SignupResponse {
    pub id: Uuid,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

#[utoipa::path(
    post,
    path = "/auth/signup",
    tag = "auth",
    request_body(content = SignupRequest, example = json!({"email": "cook@example.com", "password": "password"})),
    responses(
        (status = 201, description = "User created successfully", body = SignupResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 409, description = "Email already registered", body = ErrorResponse)
    )
)]
pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let email = req.email.trim();
    if email.is_empty() {
        return Err(ApiError::bad_request("Email cannot be empty"));
    }
    if req.password.is_empty() {
        return Err(ApiError::bad_request("Password cannot be empty"));
    }

    let password_hash = hash_password(&req.password)?;

    let mut conn = state.pool.get()?;

    // Uniqueness is the users.email constraint; a race between two signups
    // for the same address still resolves to exactly one Conflict.
    let user: User = diesel::insert_into(users::table)
        .values(&NewUser {
            email,
            password_hash: &password_hash,
        })
        .returning(User::as_returning())
        .get_result(&mut conn)
        .map_err(|err| match err {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UniqueViolation,
                _,
            ) => ApiError::conflict("A user with this email already exists"),
            err => err.into(),
        })?;

    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            id: user.id,
            email: user.email,
            created_at: user.created_at,
        }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_response_has_no_hash_field() {
        let body = serde_json::to_value(SignupResponse {
            id: Uuid::new_v4(),
            email: "cook@example.com".to_string(),
            created_at: Utc::now(),
        })
        .unwrap();

        let object = body.as_object().unwrap();
        assert_eq!(object.len(), 3);
        assert!(object.contains_key("id"));
        assert!(object.contains_key("email"));
        assert!(object.contains_key("created_at"));
        assert!(!object.contains_key("password_hash"));
    }
}
