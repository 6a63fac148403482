//! Session extractors.
//!
//! The session token is read from `Authorization: Bearer <token>` or, for
//! browser requests, from the identity provider's `__session` cookie.

use actix_web::{FromRequest, HttpRequest, dev::Payload, http::header, web};
use std::future::{Ready, ready};

use tenantblog_core::domain::TenantContext;
use tenantblog_core::ports::{AuthError, SessionClaims};

use super::error::AppError;
use crate::state::AppState;

pub const SESSION_COOKIE: &str = "__session";

/// Verified session of the caller.
#[derive(Debug, Clone)]
pub struct Session {
    pub claims: SessionClaims,
}

impl Session {
    /// The caller's active organization, if one is selected.
    pub fn tenant(&self) -> Option<TenantContext> {
        self.claims.tenant()
    }
}

fn session_token(req: &HttpRequest) -> Result<String, AuthError> {
    if let Some(value) = req.headers().get(header::AUTHORIZATION) {
        let auth_str = value
            .to_str()
            .map_err(|_| AuthError::InvalidToken("Invalid authorization header".to_string()))?;
        return auth_str
            .strip_prefix("Bearer ")
            .map(str::to_string)
            .ok_or_else(|| AuthError::InvalidToken("Expected Bearer token".to_string()));
    }

    req.cookie(SESSION_COOKIE)
        .map(|c| c.value().to_string())
        .ok_or(AuthError::MissingAuth)
}

fn verify(req: &HttpRequest) -> Result<Session, AppError> {
    let state = req.app_data::<web::Data<AppState>>().ok_or_else(|| {
        tracing::error!("AppState not found in app data");
        AppError::Internal("Server configuration error".to_string())
    })?;

    let token = session_token(req)?;
    let claims = state.sessions.verify(&token)?;
    Ok(Session { claims })
}

impl FromRequest for Session {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(verify(req))
    }
}

/// Optional session extractor - signed-out visitors get `None`.
pub struct OptionalSession(pub Option<Session>);

impl OptionalSession {
    pub fn tenant(&self) -> Option<TenantContext> {
        self.0.as_ref().and_then(Session::tenant)
    }
}

impl FromRequest for OptionalSession {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        match verify(req) {
            Ok(session) => ready(Ok(OptionalSession(Some(session)))),
            Err(e) => {
                tracing::debug!("Treating request as signed out: {}", e);
                ready(Ok(OptionalSession(None)))
            }
        }
    }
}
