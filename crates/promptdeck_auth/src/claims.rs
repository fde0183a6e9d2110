// --- File: crates/promptdeck_auth/src/claims.rs ---
use promptdeck_common::models::{OrgIdToOrgMemberInfo, User};
use serde::{Deserialize, Serialize};

/// Claims carried by an access token issued by the auth provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessTokenClaims {
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub org_id_to_org_member_info: OrgIdToOrgMemberInfo,
    pub iss: String,
    pub exp: i64,
}

impl AccessTokenClaims {
    pub fn user(&self) -> User {
        User {
            user_id: self.user_id.clone(),
            email: self.email.clone(),
            picture_url: None,
        }
    }
}
