use crate::api::ErrorResponse;
use crate::state::AppState;
use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use super::token::verify_token;

/// Identity decoded from the bearer token.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: uuid::Uuid,
    pub email: String,
}

/// Extractor that validates the Authorization header and provides the acting
/// user.
///
/// Use this in any handler that requires authentication:
/// ```ignore
/// async fn my_handler(AuthUser(user): AuthUser) -> impl IntoResponse {
///     // user.id, user.email
/// }
/// ```
pub struct AuthUser(pub CurrentUser);

#[derive(Debug)]
pub enum AuthError {
    MissingHeader,
    InvalidHeader,
    InvalidFormat,
    InvalidToken,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let message = match self {
            AuthError::MissingHeader => "Missing Authorization header",
            AuthError::InvalidHeader => "Invalid Authorization header",
            AuthError::InvalidFormat => "Invalid Authorization header format",
            AuthError::InvalidToken => "Invalid or expired token",
        };

        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse {
                message: message.to_string(),
            }),
        )
            .into_response()
    }
}

/// Pull the token out of `Authorization: Bearer <token>`.
pub(super) fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let auth_header = headers
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::MissingHeader)?;

    let auth_str = auth_header.to_str().map_err(|_| AuthError::InvalidHeader)?;

    auth_str
        .strip_prefix("Bearer ")
        .ok_or(AuthError::InvalidFormat)
}

pub(super) fn authenticate(headers: &HeaderMap, secret: &str) -> Result<CurrentUser, AuthError> {
    let token = bearer_token(headers)?;
    let claims = verify_token(token, secret).map_err(|_| AuthError::InvalidToken)?;

    Ok(CurrentUser {
        id: claims.sub,
        email: claims.email,
    })
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = AppState::from_ref(state);
        let user = authenticate(&parts.headers, &state.config.token_secret)?;
        Ok(AuthUser(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::token::issue_token;
    use axum::http::HeaderValue;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_missing_header() {
        assert!(matches!(
            authenticate(&HeaderMap::new(), "s"),
            Err(AuthError::MissingHeader)
        ));
    }

    #[test]
    fn test_wrong_scheme() {
        let headers = headers_with("Basic dXNlcjpwYXNz");
        assert!(matches!(
            authenticate(&headers, "s"),
            Err(AuthError::InvalidFormat)
        ));
    }

    #[test]
    fn test_forged_token() {
        let token = issue_token(uuid::Uuid::new_v4(), "a@b.c", "other-secret", 3600).unwrap();
        let headers = headers_with(&format!("Bearer {token}"));
        assert!(matches!(
            authenticate(&headers, "secret"),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_valid_token() {
        let user_id = uuid::Uuid::new_v4();
        let token = issue_token(user_id, "a@b.c", "secret", 3600).unwrap();
        let headers = headers_with(&format!("Bearer {token}"));

        let user = authenticate(&headers, "secret").unwrap();
        assert_eq!(user.id, user_id);
        assert_eq!(user.email, "a@b.c");
    }
}
