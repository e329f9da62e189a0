//! Pass-through endpoints for the opaque key/value cache store.

use crate::api::{ApiError, ErrorResponse};
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    Json,
};
use redis::AsyncCommands;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, OpenApi, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
pub struct GetCacheParams {
    /// Cache key to read
    pub key: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct SetCacheParams {
    /// Cache key to write
    pub key: String,
    /// Value to store under the key
    pub value: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CacheEntryResponse {
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[utoipa::path(
    get,
    path = "/cache/get",
    tag = "cache",
    params(GetCacheParams),
    responses(
        (status = 200, description = "Value if present, otherwise a not-found message", body = CacheEntryResponse),
        (status = 400, description = "Missing key parameter", body = ErrorResponse)
    )
)]
pub async fn get_cache(
    State(state): State<AppState>,
    Query(params): Query<GetCacheParams>,
) -> Result<Json<CacheEntryResponse>, ApiError> {
    let key = params
        .key
        .ok_or_else(|| ApiError::bad_request("Key query parameter is required"))?;

    let mut cache = state.cache.clone();
    let value: Option<String> = cache.get(&key).await?;

    Ok(Json(match value {
        Some(value) => CacheEntryResponse {
            key,
            value: Some(value),
            message: None,
        },
        None => CacheEntryResponse {
            key,
            value: None,
            message: Some("not found".to_string()),
        },
    }))
}

#[utoipa::path(
    get,
    path = "/cache/set",
    tag = "cache",
    params(SetCacheParams),
    responses(
        (status = 200, description = "Stored key and value", body = CacheEntryResponse)
    )
)]
pub async fn set_cache(
    State(state): State<AppState>,
    Query(params): Query<SetCacheParams>,
) -> Result<Json<CacheEntryResponse>, ApiError> {
    let mut cache = state.cache.clone();
    let _: () = cache.set(&params.key, &params.value).await?;

    Ok(Json(CacheEntryResponse {
        key: params.key,
        value: Some(params.value),
        message: None,
    }))
}

#[derive(OpenApi)]
#[openapi(
    paths(get_cache, set_cache),
    components(schemas(CacheEntryResponse))
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_omits_message() {
        let body = serde_json::to_value(CacheEntryResponse {
            key: "k".to_string(),
            value: Some("v".to_string()),
            message: None,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"key": "k", "value": "v"}));
    }

    #[test]
    fn test_miss_omits_value() {
        let body = serde_json::to_value(CacheEntryResponse {
            key: "k".to_string(),
            value: None,
            message: Some("not found".to_string()),
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"key": "k", "message": "not found"}));
    }
}
