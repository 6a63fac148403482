//! Same-origin check for cookie-authenticated form posts.
//!
//! Browsers attach `Origin` (or at least `Referer`) to cross-site form
//! submissions. A request naming a different host than the one it was sent to
//! is rejected; a request naming neither comes from a non-browser client.

use actix_web::{HttpRequest, http::header};

use super::error::AppError;

/// Host (with port) of an `Origin` or `Referer` value.
fn source_host(value: &str) -> Option<&str> {
    let (_, rest) = value.split_once("://")?;
    rest.split(['/', '?', '#']).next().filter(|h| !h.is_empty())
}

fn header_str<'a>(req: &'a HttpRequest, name: header::HeaderName) -> Option<&'a str> {
    req.headers().get(name).and_then(|v| v.to_str().ok())
}

/// Reject a request whose `Origin`/`Referer` host differs from its `Host`.
pub fn require_same_origin(req: &HttpRequest) -> Result<(), AppError> {
    let source = header_str(req, header::ORIGIN).or_else(|| header_str(req, header::REFERER));
    let Some(source) = source else {
        return Ok(());
    };

    let info = req.connection_info();
    let target = info.host();
    match source_host(source) {
        Some(host) if host.eq_ignore_ascii_case(target) => Ok(()),
        _ => {
            tracing::warn!(source = %source, host = %target, "Rejected cross-origin form post");
            Err(AppError::Forbidden(
                "Cross-origin form submissions are not allowed".to_string(),
            ))
        }
    }
}
