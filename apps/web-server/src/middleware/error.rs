//! Error handling - RFC 7807 compliant responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use askama::Template;
use std::fmt;

use tenantblog_core::error::{DomainError, IdentityError, RepoError};
use tenantblog_core::ports::AuthError;
use tenantblog_shared::ErrorResponse;

use crate::views::{ErrorTemplate, NavView};

/// Application-level error type that converts to RFC 7807 responses.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    Unauthorized(String),
    Forbidden(String),
    Validation(Vec<String>),
    Upstream(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            AppError::Forbidden(msg) => write!(f, "Forbidden: {}", msg),
            AppError::Validation(errors) => write!(f, "Validation errors: {}", errors.join(", ")),
            AppError::Upstream(msg) => write!(f, "Upstream error: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::NotFound(detail) => ErrorResponse::new(404, "Not Found").with_detail(detail),
            AppError::BadRequest(detail) => ErrorResponse::bad_request(detail),
            AppError::Unauthorized(detail) => ErrorResponse::unauthorized(detail),
            AppError::Forbidden(detail) => ErrorResponse::forbidden(detail),
            AppError::Validation(errors) => ErrorResponse::unprocessable(errors.clone()),
            AppError::Upstream(detail) => {
                tracing::error!("Upstream error: {}", detail);
                ErrorResponse::bad_gateway()
            }
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

impl AppError {
    /// Message safe to show a visitor. Upstream and internal details are
    /// logged here and replaced with a generic sentence.
    fn public_message(&self) -> String {
        match self {
            AppError::NotFound(detail)
            | AppError::BadRequest(detail)
            | AppError::Unauthorized(detail)
            | AppError::Forbidden(detail) => detail.clone(),
            AppError::Validation(errors) => errors.join("; "),
            AppError::Upstream(detail) => {
                tracing::error!("Upstream error: {}", detail);
                "A service this page depends on is unavailable. Try again shortly.".to_string()
            }
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                "Something went wrong on our side.".to_string()
            }
        }
    }
}

/// [`AppError`] raised by an HTML page, rendered as an HTML error page.
#[derive(Debug)]
pub struct PageError(pub AppError);

impl fmt::Display for PageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl ResponseError for PageError {
    fn status_code(&self) -> StatusCode {
        self.0.status_code()
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let page = ErrorTemplate {
            nav: NavView::new(None, None),
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Error").to_string(),
            message: self.0.public_message(),
        };

        match page.render() {
            Ok(body) => HttpResponse::build(status)
                .content_type("text/html; charset=utf-8")
                .body(body),
            Err(e) => {
                tracing::error!("Error page rendering failed: {}", e);
                HttpResponse::build(status).finish()
            }
        }
    }
}

impl From<AppError> for PageError {
    fn from(err: AppError) -> Self {
        PageError(err)
    }
}

impl From<DomainError> for PageError {
    fn from(err: DomainError) -> Self {
        PageError(err.into())
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(errors) => AppError::Validation(errors),
            DomainError::MissingOrganization => {
                AppError::BadRequest("No organization selected".to_string())
            }
            DomainError::Repository(e) => e.into(),
            DomainError::Identity(e) => e.into(),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Connection(msg) => {
                tracing::error!("Database connection error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
            RepoError::Query(msg) | RepoError::Constraint(msg) => {
                tracing::error!("Database query error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
        }
    }
}

impl From<IdentityError> for AppError {
    fn from(err: IdentityError) -> Self {
        match err {
            IdentityError::NotFound(id) => AppError::NotFound(format!("organization {id}")),
            IdentityError::Upstream(msg) => AppError::Upstream(msg),
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Configuration(msg) => AppError::Internal(msg),
            other => AppError::Unauthorized(other.to_string()),
        }
    }
}

impl From<askama::Error> for AppError {
    fn from(err: askama::Error) -> Self {
        AppError::Internal(format!("template rendering failed: {err}"))
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

/// Result type alias for HTML page handlers.
pub type PageResult<T> = Result<T, PageError>;

#[cfg(test)]
mod tests {
    use actix_web::body::to_bytes;

    use super::*;

    async fn body_of(resp: HttpResponse) -> String {
        let bytes = to_bytes(resp.into_body()).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[actix_web::test]
    async fn test_identity_outage_is_bad_gateway_without_detail() {
        let err = AppError::from(DomainError::Identity(IdentityError::Upstream(
            "organization lookup returned 503 Service Unavailable".to_string(),
        )));

        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
        let body: serde_json::Value =
            serde_json::from_str(&body_of(err.error_response()).await).unwrap();
        assert_eq!(body["status"], 502);
        assert!(body.get("detail").is_none());
    }

    #[actix_web::test]
    async fn test_connection_error_is_internal_without_detail() {
        let err = AppError::from(DomainError::Repository(RepoError::Connection(
            "pool timed out while waiting for an open connection".to_string(),
        )));

        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_of(err.error_response()).await;
        assert!(!body.contains("pool timed out"));
        assert!(!body.contains("detail"));
    }

    #[actix_web::test]
    async fn test_unknown_organization_is_not_found() {
        let err = AppError::from(IdentityError::NotFound("org_9".to_string()));

        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_page_error_renders_html() {
        let resp = PageError(AppError::Upstream("connect timeout".to_string())).error_response();

        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(
            resp.headers().get("content-type").unwrap(),
            "text/html; charset=utf-8"
        );
        let html = body_of(resp).await;
        assert!(html.contains("502 Bad Gateway"));
        assert!(!html.contains("connect timeout"));
    }
}
