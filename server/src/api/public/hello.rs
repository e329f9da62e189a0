#[utoipa::path(
    get,
    path = "/",
    tag = "root",
    responses(
        (status = 200, description = "Welcome message", body = String)
    )
)]
pub async fn hello() -> &'static str {
    "Welcome to Skillet!"
}
