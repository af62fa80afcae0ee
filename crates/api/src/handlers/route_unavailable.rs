use http::StatusCode;

#[utoipa::path(
    get,
    path = "/api/0.1/",
    tag = "Conversion",
    summary = "GET is not supported on the 0.1 API",
    responses(
        (status = 404, description = "This route is not available", body = String),
    ),
)]
pub async fn route_unavailable() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "This route is not available")
}
