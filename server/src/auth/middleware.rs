use crate::state::AppState;
use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};

use super::extractor::authenticate;

/// Middleware that requires a valid bearer token for all requests.
/// Apply this to routes that should be protected by default.
pub async fn require_auth(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    match authenticate(request.headers(), &state.config.token_secret) {
        Ok(_) => next.run(request).await,
        Err(rejection) => rejection.into_response(),
    }
}
