//! Middleware for logging requests and responses.

use axum::{
    body::Body,
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Log the request and response for each request.
///
/// Both the request and response are logged at the `info` level.
/// If the body is longer than [LOG_BODY_LENGTH_LIMIT] bytes, it is
/// truncated and the full body is logged at the `debug` level.
///
/// Request bodies larger than [REQUEST_BODY_LIMIT] bytes are rejected with 413
/// before they reach the route handler.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let (parts, body) = request.into_parts();
    let body_bytes = match axum::body::to_bytes(body, REQUEST_BODY_LIMIT).await {
        Ok(bytes) => bytes,
        Err(error) => {
            tracing::error!("Could not read request body: {error}");
            return StatusCode::PAYLOAD_TOO_LARGE.into_response();
        }
    };
    log_request(&parts, &String::from_utf8_lossy(&body_bytes));

    let request = Request::from_parts(parts, Body::from(body_bytes));
    let response = next.run(request).await;

    let (parts, body) = response.into_parts();
    let body_bytes = match axum::body::to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(error) => {
            tracing::error!("Could not read response body: {error}");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };
    log_response(&parts, &String::from_utf8_lossy(&body_bytes));

    Response::from_parts(parts, Body::from(body_bytes))
}

/// The largest request body, in bytes, the middleware will read into memory.
///
/// Matches the default body limit axum applies to extractors such as `Json`.
pub const REQUEST_BODY_LIMIT: usize = 2 * 1024 * 1024;

/// The number of bytes of a body to log at the `info` level.
pub const LOG_BODY_LENGTH_LIMIT: usize = 64;

/// Cut `body` down to at most `limit` bytes without splitting a character.
fn truncate(body: &str, limit: usize) -> &str {
    if body.len() <= limit {
        return body;
    }

    let end = (0..=limit)
        .rev()
        .find(|&index| body.is_char_boundary(index))
        .unwrap_or(0);

    &body[..end]
}

fn log_request(parts: &axum::http::request::Parts, body: &str) {
    let method = &parts.method;
    let uri = &parts.uri;

    if body.len() > LOG_BODY_LENGTH_LIMIT {
        tracing::info!(
            "Received request: {method} {uri}\nbody: {:}...",
            truncate(body, LOG_BODY_LENGTH_LIMIT)
        );
        tracing::debug!("Full request body: {body:?}");
    } else {
        tracing::info!("Received request: {method} {uri}\nbody: {body:?}");
    }
}

fn log_response(parts: &axum::http::response::Parts, body: &str) {
    let status = parts.status;

    if body.len() > LOG_BODY_LENGTH_LIMIT {
        tracing::info!(
            "Sending response: {status}\nbody: {:}...",
            truncate(body, LOG_BODY_LENGTH_LIMIT)
        );
        tracing::debug!("Full response body: {body:?}");
    } else {
        tracing::info!("Sending response: {status}\nbody: {body:?}");
    }
}

#[cfg(test)]
mod tests {
    use axum::{Router, http::StatusCode, middleware, routing::post};
    use axum_test::TestServer;

    use super::{LOG_BODY_LENGTH_LIMIT, REQUEST_BODY_LIMIT, logging_middleware, truncate};

    #[test]
    fn truncate_keeps_short_bodies() {
        assert_eq!(truncate("hello", 10), "hello");
    }

    #[test]
    fn truncate_cuts_long_bodies() {
        let body = "a".repeat(LOG_BODY_LENGTH_LIMIT * 2);

        assert_eq!(truncate(&body, LOG_BODY_LENGTH_LIMIT).len(), LOG_BODY_LENGTH_LIMIT);
    }

    #[test]
    fn truncate_does_not_split_characters() {
        // 'é' is two bytes, so byte 3 is in the middle of a character.
        assert_eq!(truncate("aéé", 4), "aé");
        assert_eq!(truncate("aéé", 3), "aé");
        assert_eq!(truncate("aéé", 2), "a");
    }

    #[tokio::test]
    async fn passes_bodies_through_unchanged() {
        let app = Router::new()
            .route("/echo", post(|body: String| async move { body }))
            .layer(middleware::from_fn(logging_middleware));
        let server = TestServer::try_new(app).expect("Could not create test server.");
        let body = "é".repeat(LOG_BODY_LENGTH_LIMIT);

        let response = server.post("/echo").text(body.clone()).await;

        response.assert_status(StatusCode::OK);
        assert_eq!(response.text(), body);
    }

    #[tokio::test]
    async fn rejects_oversized_request_body() {
        let app = Router::new()
            .route("/echo", post(|body: String| async move { body }))
            .layer(middleware::from_fn(logging_middleware));
        let server = TestServer::try_new(app).expect("Could not create test server.");
        let body = "a".repeat(REQUEST_BODY_LIMIT + 1);

        let response = server.post("/echo").text(body).await;

        response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn accepts_body_at_limit() {
        let app = Router::new()
            .route("/echo", post(|body: String| async move { body.len().to_string() }))
            .layer(middleware::from_fn(logging_middleware));
        let server = TestServer::try_new(app).expect("Could not create test server.");
        let body = "a".repeat(REQUEST_BODY_LIMIT);

        let response = server.post("/echo").text(body).await;

        response.assert_status(StatusCode::OK);
        assert_eq!(response.text(), REQUEST_BODY_LIMIT.to_string());
    }
}
