//! JWT session verifier.
//!
//! Session tokens are issued by the identity provider. Production setups verify
//! them with the provider's RS256 public key; a shared HS256 secret is accepted
//! for development, where [`JwtSessionVerifier::issue`] can mint tokens.

use chrono::{TimeDelta, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use tenantblog_core::ports::{AuthError, SessionClaims, SessionVerifier};

/// Key material used to verify session tokens.
#[derive(Debug, Clone)]
pub enum SessionKey {
    /// HS256 shared secret.
    Secret(String),
    /// RS256 public key in PEM form.
    PublicKeyPem(String),
}

/// Session token verification configuration.
#[derive(Debug, Clone)]
pub struct SessionTokenConfig {
    pub key: SessionKey,
    /// Expected `iss`; unchecked when `None`.
    pub issuer: Option<String>,
    /// Clock skew tolerance in seconds.
    pub leeway_secs: u64,
}

impl SessionTokenConfig {
    /// Load configuration from `SESSION_PUBLIC_KEY`, `SESSION_SECRET`,
    /// `SESSION_ISSUER` and `SESSION_LEEWAY_SECS`.
    ///
    /// One of the two keys is required; there is no built-in fallback secret.
    pub fn from_env() -> Result<Self, AuthError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AuthError> {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let key = if let Some(pem) = var("SESSION_PUBLIC_KEY") {
            SessionKey::PublicKeyPem(pem.replace("\\n", "\n"))
        } else if let Some(secret) = var("SESSION_SECRET") {
            let is_production = var("RUST_ENV")
                .map(|v| v == "production" || v == "prod")
                .unwrap_or(false);
            if is_production {
                tracing::warn!("Verifying sessions with a shared secret. Prefer SESSION_PUBLIC_KEY in production.");
            }
            SessionKey::Secret(secret)
        } else {
            return Err(AuthError::Configuration(
                "SESSION_PUBLIC_KEY or SESSION_SECRET must be set".to_string(),
            ));
        };

        Ok(Self {
            key,
            issuer: var("SESSION_ISSUER"),
            leeway_secs: var("SESSION_LEEWAY_SECS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(5),
        })
    }
}

/// Wire form of the session claims.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    exp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    iat: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    iss: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    org_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    org_slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    org_role: Option<String>,
}

/// JWT-based session verifier.
pub struct JwtSessionVerifier {
    decoding_key: DecodingKey,
    encoding_key: Option<EncodingKey>,
    validation: Validation,
    issuer: Option<String>,
}

impl JwtSessionVerifier {
    pub fn new(config: SessionTokenConfig) -> Result<Self, AuthError> {
        let (decoding_key, encoding_key, algorithm) = match &config.key {
            SessionKey::Secret(secret) => (
                DecodingKey::from_secret(secret.as_bytes()),
                Some(EncodingKey::from_secret(secret.as_bytes())),
                Algorithm::HS256,
            ),
            SessionKey::PublicKeyPem(pem) => (
                DecodingKey::from_rsa_pem(pem.as_bytes())
                    .map_err(|e| AuthError::Configuration(e.to_string()))?,
                None,
                Algorithm::RS256,
            ),
        };

        let mut validation = Validation::new(algorithm);
        validation.validate_aud = false;
        validation.leeway = config.leeway_secs;
        if let Some(issuer) = &config.issuer {
            validation.set_issuer(&[issuer]);
        }

        Ok(Self {
            decoding_key,
            encoding_key,
            validation,
            issuer: config.issuer,
        })
    }

    /// Mint a session token. Only available with a shared secret.
    pub fn issue(&self, claims: &SessionClaims) -> Result<String, AuthError> {
        let key = self.encoding_key.as_ref().ok_or_else(|| {
            AuthError::Configuration("cannot issue sessions with a public key".to_string())
        })?;

        let wire = Claims {
            sub: claims.user_id.clone(),
            exp: claims.exp,
            iat: Some(Utc::now().timestamp()),
            iss: self.issuer.clone(),
            org_id: claims.org_id.clone(),
            org_slug: claims.org_slug.clone(),
            org_role: claims.org_role.clone(),
        };

        encode(&Header::new(Algorithm::HS256), &wire, key)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))
    }

    /// Claims for a session expiring `ttl` from now.
    pub fn claims_for(
        user_id: impl Into<String>,
        org_id: Option<&str>,
        org_slug: Option<&str>,
        ttl: TimeDelta,
    ) -> SessionClaims {
        SessionClaims {
            user_id: user_id.into(),
            org_id: org_id.map(String::from),
            org_slug: org_slug.map(String::from),
            org_role: None,
            exp: (Utc::now() + ttl).timestamp(),
        }
    }
}

impl SessionVerifier for JwtSessionVerifier {
    fn verify(&self, token: &str) -> Result<SessionClaims, AuthError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                    _ => AuthError::InvalidToken(e.to_string()),
                }
            })?;

        let claims = token_data.claims;
        Ok(SessionClaims {
            user_id: claims.sub,
            org_id: claims.org_id,
            org_slug: claims.org_slug,
            org_role: claims.org_role,
            exp: claims.exp,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn test_config_without_key_is_rejected() {
        let result = SessionTokenConfig::from_lookup(lookup(&[("RUST_ENV", "development")]));

        assert!(matches!(result, Err(AuthError::Configuration(_))));
    }

    #[test]
    fn test_blank_secret_is_rejected() {
        let result = SessionTokenConfig::from_lookup(lookup(&[("SESSION_SECRET", "  ")]));

        assert!(matches!(result, Err(AuthError::Configuration(_))));
    }

    #[test]
    fn test_config_prefers_public_key() {
        let config = SessionTokenConfig::from_lookup(lookup(&[
            ("SESSION_PUBLIC_KEY", "-----BEGIN PUBLIC KEY-----\\nabc\\n-----END PUBLIC KEY-----"),
            ("SESSION_SECRET", "shared"),
            ("SESSION_ISSUER", "https://identity.test"),
            ("SESSION_LEEWAY_SECS", "30"),
        ]))
        .unwrap();

        assert!(matches!(
            config.key,
            SessionKey::PublicKeyPem(pem) if pem == "-----BEGIN PUBLIC KEY-----\nabc\n-----END PUBLIC KEY-----"
        ));
        assert_eq!(config.issuer.as_deref(), Some("https://identity.test"));
        assert_eq!(config.leeway_secs, 30);
    }

    #[test]
    fn test_token_from_another_secret_is_rejected() {
        let config = SessionTokenConfig::from_lookup(lookup(&[("SESSION_SECRET", "server-secret")]))
            .unwrap();
        let verifier = JwtSessionVerifier::new(config).unwrap();
        let forger = JwtSessionVerifier::new(SessionTokenConfig {
            key: SessionKey::Secret("guessed-secret".to_string()),
            issuer: None,
            leeway_secs: 0,
        })
        .unwrap();

        let claims =
            JwtSessionVerifier::claims_for("user_x", Some("org_2"), None, TimeDelta::hours(1));
        let forged = forger.issue(&claims).unwrap();

        assert!(matches!(
            verifier.verify(&forged),
            Err(AuthError::InvalidToken(_))
        ));
    }

    fn test_config() -> SessionTokenConfig {
        SessionTokenConfig {
            key: SessionKey::Secret("test-secret-key".to_string()),
            issuer: Some("https://identity.test".to_string()),
            leeway_secs: 0,
        }
    }

    #[test]
    fn test_issue_and_verify_with_org() {
        let verifier = JwtSessionVerifier::new(test_config()).unwrap();
        let claims = JwtSessionVerifier::claims_for(
            "user_1",
            Some("org_1"),
            Some("acme"),
            TimeDelta::hours(1),
        );

        let token = verifier.issue(&claims).unwrap();
        let verified = verifier.verify(&token).unwrap();

        assert_eq!(verified.user_id, "user_1");
        assert_eq!(verified.org_id.as_deref(), Some("org_1"));
        assert_eq!(verified.org_slug.as_deref(), Some("acme"));
        assert_eq!(verified.tenant().unwrap().org_id.as_str(), "org_1");
    }

    #[test]
    fn test_session_without_org_has_no_tenant() {
        let verifier = JwtSessionVerifier::new(test_config()).unwrap();
        let claims = JwtSessionVerifier::claims_for("user_1", None, None, TimeDelta::hours(1));

        let token = verifier.issue(&claims).unwrap();
        let verified = verifier.verify(&token).unwrap();

        assert!(verified.tenant().is_none());
    }

    #[test]
    fn test_expired_token() {
        let verifier = JwtSessionVerifier::new(test_config()).unwrap();
        let claims =
            JwtSessionVerifier::claims_for("user_1", Some("org_1"), None, TimeDelta::hours(-1));

        let token = verifier.issue(&claims).unwrap();

        assert!(matches!(
            verifier.verify(&token),
            Err(AuthError::TokenExpired)
        ));
    }

    #[test]
    fn test_validate_invalid_token() {
        let verifier = JwtSessionVerifier::new(test_config()).unwrap();

        let result = verifier.verify("invalid-token");

        assert!(matches!(result, Err(AuthError::InvalidToken(_))));
    }

    #[test]
    fn test_wrong_issuer_rejected() {
        let issuer_a = JwtSessionVerifier::new(SessionTokenConfig {
            issuer: Some("issuer-a".to_string()),
            ..test_config()
        })
        .unwrap();
        let issuer_b = JwtSessionVerifier::new(SessionTokenConfig {
            issuer: Some("issuer-b".to_string()),
            ..test_config()
        })
        .unwrap();

        let claims = JwtSessionVerifier::claims_for("user_1", None, None, TimeDelta::hours(1));
        let token = issuer_a.issue(&claims).unwrap();

        assert!(issuer_b.verify(&token).is_err());
    }

    #[test]
    fn test_bad_public_key_is_configuration_error() {
        let result = JwtSessionVerifier::new(SessionTokenConfig {
            key: SessionKey::PublicKeyPem("not a pem".to_string()),
            issuer: None,
            leeway_secs: 0,
        });

        assert!(matches!(result, Err(AuthError::Configuration(_))));
    }
}
