//! Static organization directory for development and tests.

use std::collections::HashMap;

use async_trait::async_trait;

use tenantblog_core::domain::{OrgId, Organization};
use tenantblog_core::error::IdentityError;
use tenantblog_core::ports::OrganizationDirectory;

/// Organizations held in memory, keyed by id.
pub struct StaticOrganizationDirectory {
    organizations: HashMap<OrgId, Organization>,
}

impl StaticOrganizationDirectory {
    pub fn new(organizations: impl IntoIterator<Item = Organization>) -> Self {
        Self {
            organizations: organizations
                .into_iter()
                .map(|org| (org.id.clone(), org))
                .collect(),
        }
    }

    /// Parse `id=Name` pairs separated by commas, e.g. `org_1=Acme,org_2=Globex`.
    ///
    /// The slug is derived from the name. Malformed entries are skipped.
    pub fn parse(spec: &str) -> Self {
        let organizations = spec.split(',').filter_map(|entry| {
            let (id, name) = entry.split_once('=')?;
            let id = OrgId::new(id).ok()?;
            let name = name.trim();
            if name.is_empty() {
                return None;
            }
            Some(Organization::new(id, name).with_slug(slugify(name)))
        });
        Self::new(organizations)
    }
}

fn slugify(name: &str) -> String {
    name.split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

#[async_trait]
impl OrganizationDirectory for StaticOrganizationDirectory {
    async fn get_organization(&self, org_id: &OrgId) -> Result<Organization, IdentityError> {
        self.organizations
            .get(org_id)
            .cloned()
            .ok_or_else(|| IdentityError::NotFound(org_id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_parse_and_lookup() {
        let directory = StaticOrganizationDirectory::parse("org_1=Acme Corp, org_2=Globex,bad,=x");

        let acme = directory
            .get_organization(&OrgId::new("org_1").unwrap())
            .await
            .unwrap();
        assert_eq!(acme.name, "Acme Corp");
        assert_eq!(acme.slug.as_deref(), Some("acme-corp"));

        let globex = directory
            .get_organization(&OrgId::new("org_2").unwrap())
            .await
            .unwrap();
        assert_eq!(globex.name, "Globex");
    }

    #[tokio::test]
    async fn test_unknown_org_is_not_found() {
        let directory = StaticOrganizationDirectory::new([]);

        let err = directory
            .get_organization(&OrgId::new("org_9").unwrap())
            .await
            .unwrap_err();

        assert!(matches!(err, IdentityError::NotFound(id) if id == "org_9"));
    }

}
