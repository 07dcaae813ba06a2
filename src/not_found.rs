use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Router fallback for paths that do not match any route.
pub async fn get_404_not_found() -> Response {
    get_404_not_found_response()
}

/// A 404 response with an empty body.
pub fn get_404_not_found_response() -> Response {
    StatusCode::NOT_FOUND.into_response()
}
