pub mod auth;
pub mod hello;

use crate::state::AppState;
use axum::routing::{get, post};
use axum::Router;
use utoipa::OpenApi;

use super::cache;

/// Returns the router for public endpoints (no auth required)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(hello::hello))
        .route("/auth/signup", post(auth::signup::signup))
        .route("/auth/login", post(auth::login::login))
        .route("/cache/get", get(cache::get_cache))
        .route("/cache/set", get(cache::set_cache))
}

#[derive(OpenApi)]
#[openapi(
    paths(hello::hello, auth::signup::signup, auth::login::login,),
    components(schemas(
        auth::signup::SignupRequest,
        auth::signup::SignupResponse,
        auth::login::LoginRequest,
        auth::login::LoginResponse,
        auth::login::LoginUser,
    ))
)]
pub struct ApiDoc;
