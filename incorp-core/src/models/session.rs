use serde::{Deserialize, Serialize};

/// Role and identity context for the signed-in user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tombstone {
    /// Roles granted by the identity provider (e.g. `staff`).
    pub keycloak_roles: Vec<String>,
    /// Roles granted on the current business (e.g. `edit`, `view`).
    pub auth_roles: Vec<String>,
    pub user_email: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountType {
    #[default]
    Basic,
    Premium,
    Staff,
    SbcStaff,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountInformation {
    pub account_type: AccountType,
    pub id: Option<i64>,
    pub label: String,
}
