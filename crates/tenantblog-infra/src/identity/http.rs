//! HTTP client for the identity provider's organization API.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;

use tenantblog_core::domain::{OrgId, Organization};
use tenantblog_core::error::IdentityError;
use tenantblog_core::ports::OrganizationDirectory;

/// Identity provider backend API configuration.
#[derive(Debug, Clone)]
pub struct IdentityApiConfig {
    pub api_url: String,
    pub secret_key: String,
}

impl IdentityApiConfig {
    pub const DEFAULT_API_URL: &'static str = "https://api.clerk.com";
}

/// Organization payload returned by `GET /v1/organizations/{id}`.
#[derive(Debug, Deserialize)]
struct OrganizationPayload {
    id: String,
    name: String,
    #[serde(default)]
    slug: Option<String>,
}

impl TryFrom<OrganizationPayload> for Organization {
    type Error = IdentityError;

    fn try_from(payload: OrganizationPayload) -> Result<Self, Self::Error> {
        let id = OrgId::new(payload.id)
            .map_err(|_| IdentityError::Upstream("organization without id".to_string()))?;
        Ok(Organization {
            id,
            name: payload.name,
            slug: payload.slug.filter(|s| !s.is_empty()),
        })
    }
}

/// Organization directory backed by the identity provider's REST API.
pub struct HttpOrganizationDirectory {
    client: reqwest::Client,
    config: IdentityApiConfig,
}

impl HttpOrganizationDirectory {
    pub fn new(config: IdentityApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn organization_url(&self, org_id: &OrgId) -> String {
        format!(
            "{}/v1/organizations/{}",
            self.config.api_url.trim_end_matches('/'),
            org_id
        )
    }
}

#[async_trait]
impl OrganizationDirectory for HttpOrganizationDirectory {
    async fn get_organization(&self, org_id: &OrgId) -> Result<Organization, IdentityError> {
        let response = self
            .client
            .get(self.organization_url(org_id))
            .bearer_auth(&self.config.secret_key)
            .send()
            .await
            .map_err(|e| IdentityError::Upstream(e.to_string()))?;

        match response.status() {
            StatusCode::NOT_FOUND => {
                tracing::warn!(org_id = %org_id, "Organization not found at identity provider");
                Err(IdentityError::NotFound(org_id.to_string()))
            }
            status if !status.is_success() => Err(IdentityError::Upstream(format!(
                "organization lookup returned {status}"
            ))),
            _ => response
                .json::<OrganizationPayload>()
                .await
                .map_err(|e| IdentityError::Upstream(e.to_string()))?
                .try_into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use serde_json::json;

    use super::*;

    fn directory(server: &MockServer) -> HttpOrganizationDirectory {
        HttpOrganizationDirectory::new(IdentityApiConfig {
            api_url: server.base_url(),
            secret_key: "sk_test".to_string(),
        })
    }

    #[tokio::test]
    async fn test_get_organization_sends_secret_and_parses() {
        let server = MockServer::start_async().await;
        let lookup = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/v1/organizations/org_1")
                    .header("authorization", "Bearer sk_test");
                then.status(200)
                    .json_body(json!({ "id": "org_1", "name": "Acme", "slug": "acme" }));
            })
            .await;

        let org = directory(&server)
            .get_organization(&OrgId::new("org_1").unwrap())
            .await
            .unwrap();

        lookup.assert_async().await;
        assert_eq!(org.name, "Acme");
        assert_eq!(org.slug.as_deref(), Some("acme"));
    }

    #[tokio::test]
    async fn test_missing_organization_is_not_found() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/v1/organizations/org_9");
                then.status(404).json_body(json!({ "errors": [] }));
            })
            .await;

        let err = directory(&server)
            .get_organization(&OrgId::new("org_9").unwrap())
            .await
            .unwrap_err();

        assert!(matches!(err, IdentityError::NotFound(id) if id == "org_9"));
    }

    #[tokio::test]
    async fn test_server_error_is_upstream() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/v1/organizations/org_1");
                then.status(500);
            })
            .await;

        let err = directory(&server)
            .get_organization(&OrgId::new("org_1").unwrap())
            .await
            .unwrap_err();

        assert!(matches!(err, IdentityError::Upstream(msg) if msg.contains("500")));
    }

    #[tokio::test]
    async fn test_unreadable_payload_is_upstream() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/v1/organizations/org_1");
                then.status(200).body("<html>maintenance</html>");
            })
            .await;

        let err = directory(&server)
            .get_organization(&OrgId::new("org_1").unwrap())
            .await
            .unwrap_err();

        assert!(matches!(err, IdentityError::Upstream(_)));
    }

    #[test]
    fn test_payload_ignores_unknown_fields() {
        let raw = r#"{
            "object": "organization",
            "id": "org_1",
            "name": "Acme",
            "slug": "acme",
            "members_count": 3
        }"#;

        let payload: OrganizationPayload = serde_json::from_str(raw).unwrap();
        let org = Organization::try_from(payload).unwrap();

        assert_eq!(org.id.as_str(), "org_1");
        assert_eq!(org.name, "Acme");
        assert_eq!(org.slug.as_deref(), Some("acme"));
    }

    #[test]
    fn test_organization_url() {
        let directory = HttpOrganizationDirectory::new(IdentityApiConfig {
            api_url: "https://identity.test/".to_string(),
            secret_key: "sk_test".to_string(),
        });

        assert_eq!(
            directory.organization_url(&OrgId::new("org_1").unwrap()),
            "https://identity.test/v1/organizations/org_1"
        );
    }
}
