//! Role names accepted by the proxy and their validation at team scope

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Closed set of role names known to the proxy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleName {
    ProxyAdmin,
    ProxyAdminViewer,
    OrgAdmin,
    InternalUser,
    InternalUserViewer,
    Team,
    Customer,
    Admin,
    Member,
    User,
}

impl RoleName {
    /// Every role, in the order they are listed to users
    pub const ALL: [RoleName; 10] = [
        RoleName::ProxyAdmin,
        RoleName::ProxyAdminViewer,
        RoleName::OrgAdmin,
        RoleName::InternalUser,
        RoleName::InternalUserViewer,
        RoleName::Team,
        RoleName::Customer,
        RoleName::Admin,
        RoleName::Member,
        RoleName::User,
    ];

    /// Wire name of the role
    pub fn as_str(self) -> &'static str {
        match self {
            RoleName::ProxyAdmin => "proxy_admin",
            RoleName::ProxyAdminViewer => "proxy_admin_viewer",
            RoleName::OrgAdmin => "org_admin",
            RoleName::InternalUser => "internal_user",
            RoleName::InternalUserViewer => "internal_user_viewer",
            RoleName::Team => "team",
            RoleName::Customer => "customer",
            RoleName::Admin => "admin",
            RoleName::Member => "member",
            RoleName::User => "user",
        }
    }

    /// Roles that only exist at proxy scope
    pub fn is_proxy_admin(self) -> bool {
        matches!(self, RoleName::ProxyAdmin | RoleName::ProxyAdminViewer)
    }

    /// Wire names of every role
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|r| r.as_str()).collect()
    }
}

impl fmt::Display for RoleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoleName {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| ConfigError::InvalidRole {
                value: s.to_string(),
                allowed: Self::names(),
            })
    }
}

/// Validate a role for a team membership.
///
/// The proxy-admin check runs first so a reserved role only reports the
/// team-scope error.
pub fn validate_team_role(value: &str) -> Result<RoleName, ConfigError> {
    if value == RoleName::ProxyAdmin.as_str() || value == RoleName::ProxyAdminViewer.as_str() {
        return Err(ConfigError::ReservedRole(value.to_string()));
    }
    value.parse()
}
