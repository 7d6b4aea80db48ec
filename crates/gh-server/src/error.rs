//! Error-to-HTTP response conversion.
//!
//! Implements `IntoResponse` for [`gh_core::Error`] so that route handlers
//! can return `Result<T, AppError>` directly. Bodies are plain text; this
//! is an HTML application, not a JSON API, and the not-found contract is a
//! 404 with a short text body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Wrapper so we can implement `IntoResponse` for an external type.
pub struct AppError {
    inner: gh_core::Error,
}

impl AppError {
    pub fn new(inner: gh_core::Error) -> Self {
        Self { inner }
    }
}

impl From<gh_core::Error> for AppError {
    fn from(e: gh_core::Error) -> Self {
        Self::new(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.inner.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            tracing::error!(
                status = %status,
                error = %self.inner,
                "Server error in page handler"
            );
        }

        (status, self.inner.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[test]
    fn not_found_produces_404() {
        let err = AppError::new(gh_core::Error::not_found("monster", "Basilisk"));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn body_is_plain_text() {
        let err = AppError::new(gh_core::Error::not_found("player", "Nobody"));
        let response = err.into_response();
        let body = to_bytes(response.into_body(), 1024).await.unwrap();
        assert_eq!(&body[..], b"player not found: Nobody");
    }

    #[test]
    fn validation_produces_400() {
        let err = AppError::new(gh_core::Error::Validation("bad form".into()));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn template_produces_500() {
        let err = AppError::new(gh_core::Error::Template("missing".into()));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
