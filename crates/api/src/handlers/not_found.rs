use axum::response::Html;
use http::StatusCode;

pub async fn not_found() -> (StatusCode, Html<&'static str>) {
    (
        StatusCode::NOT_FOUND,
        Html("<h1>ERROR 404:</h1>Page not found! OOPS!"),
    )
}
