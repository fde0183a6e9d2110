// --- File: crates/promptdeck_common/src/models.rs ---

// Identity and billing models shared between the auth, db, stripe and nav crates.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Picture shown when a user has none (or auth is still loading).
pub const DEFAULT_PICTURE_URL: &str =
    "https://img.propelauth.com/2a27d237-db8c-4f82-84fb-5824dfaedc87.png";

/// An authenticated user as reported by the auth provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub user_id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub picture_url: Option<String>,
}

impl User {
    /// The user's picture, or the provider default.
    pub fn picture_url_or_default(&self) -> &str {
        self.picture_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_PICTURE_URL)
    }
}

/// Membership of a user in one organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgMemberInfo {
    pub org_id: String,
    pub org_name: String,
    #[serde(default)]
    pub url_safe_org_name: String,
    #[serde(default)]
    pub user_role: String,
    #[serde(default)]
    pub inherited_user_roles_plus_current_role: Vec<String>,
    #[serde(default)]
    pub user_permissions: Vec<String>,
}

/// Result of validating an access token for a given organization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserWithOrg {
    pub user: User,
    pub org_member_info: OrgMemberInfo,
}

/// Org memberships keyed by org id, as carried in access token claims.
pub type OrgIdToOrgMemberInfo = HashMap<String, OrgMemberInfo>;

/// Row of `org_stripe_customer_mappings`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgCustomerMapping {
    pub id: Option<i64>,
    pub org_id: String,
    pub stripe_customer_id: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl OrgCustomerMapping {
    pub fn new(org_id: impl Into<String>, stripe_customer_id: impl Into<String>) -> Self {
        Self {
            id: None,
            org_id: org_id.into(),
            stripe_customer_id: stripe_customer_id.into(),
            created_at: Some(Utc::now()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_picture_url_falls_back_to_default() {
        let mut user = User {
            user_id: "u1".into(),
            email: None,
            picture_url: None,
        };
        assert_eq!(user.picture_url_or_default(), DEFAULT_PICTURE_URL);

        user.picture_url = Some(String::new());
        assert_eq!(user.picture_url_or_default(), DEFAULT_PICTURE_URL);

        user.picture_url = Some("https://cdn.example.com/me.png".into());
        assert_eq!(user.picture_url_or_default(), "https://cdn.example.com/me.png");
    }

    #[test]
    fn test_org_member_info_tolerates_missing_optional_fields() {
        let info: OrgMemberInfo =
            serde_json::from_str(r#"{"org_id":"org_1","org_name":"Acme"}"#).unwrap();
        assert_eq!(info.org_id, "org_1");
        assert!(info.user_permissions.is_empty());
    }
}
