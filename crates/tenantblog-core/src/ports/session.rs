//! Session verification port.

use crate::domain::{OrgId, TenantContext};

/// Claims carried by a verified session token.
#[derive(Debug, Clone)]
pub struct SessionClaims {
    pub user_id: String,
    pub org_id: Option<String>,
    pub org_slug: Option<String>,
    pub org_role: Option<String>,
    pub exp: i64,
}

impl SessionClaims {
    /// The active organization of this session, if any.
    pub fn tenant(&self) -> Option<TenantContext> {
        let org_id = OrgId::new(self.org_id.clone()?).ok()?;
        let mut tenant = TenantContext::new(org_id, self.user_id.clone());
        tenant.org_slug = self.org_slug.clone().filter(|s| !s.is_empty());
        Some(tenant)
    }
}

/// Verifies session tokens issued by the identity provider.
pub trait SessionVerifier: Send + Sync {
    fn verify(&self, token: &str) -> Result<SessionClaims, AuthError>;
}

/// Authentication errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Missing session")]
    MissingAuth,

    #[error("Session key configuration error: {0}")]
    Configuration(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(org_id: Option<&str>) -> SessionClaims {
        SessionClaims {
            user_id: "user_1".to_string(),
            org_id: org_id.map(String::from),
            org_slug: Some("acme".to_string()),
            org_role: Some("org:admin".to_string()),
            exp: 0,
        }
    }

    #[test]
    fn test_tenant_resolved_from_org_claim() {
        let tenant = claims(Some("org_1")).tenant().unwrap();

        assert_eq!(tenant.org_id.as_str(), "org_1");
        assert_eq!(tenant.org_slug.as_deref(), Some("acme"));
        assert_eq!(tenant.user_id, "user_1");
    }

    #[test]
    fn test_no_tenant_without_org() {
        assert!(claims(None).tenant().is_none());
        assert!(claims(Some("")).tenant().is_none());
    }
}
