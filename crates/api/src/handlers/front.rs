use http::StatusCode;

pub async fn front() -> (StatusCode, &'static str) {
    (StatusCode::OK, "Use /api/0.1 as end point")
}
