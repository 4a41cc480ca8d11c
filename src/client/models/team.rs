//! Team membership models

use serde::{Deserialize, Deserializer, Serialize};

/// Body of `POST /team/member_add`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberAddRequest {
    /// Member being added
    pub member: NewMember,

    /// Team the member joins
    pub team_id: String,

    /// Per-member budget inside the team
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_budget_in_team: Option<f64>,
}

/// Member entry nested in [`MemberAddRequest`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMember {
    pub role: String,
    pub user_id: String,
}

/// Body of `POST /team/member_update`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberUpdateRequest {
    pub user_id: String,
    pub role: String,
    pub team_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_budget_in_team: Option<f64>,
}

/// Body of `POST /team/member_delete`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberDeleteRequest {
    pub user_id: String,
    pub team_id: String,
}

/// Response of `GET /team/info`
///
/// Only the membership fields are modelled; everything else the proxy
/// returns is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TeamInfo {
    /// Team members and their roles
    #[serde(default, deserialize_with = "null_as_empty")]
    pub members_with_roles: Vec<MemberWithRole>,

    /// Membership rows linking members to their per-team budget
    #[serde(default, deserialize_with = "null_as_empty")]
    pub team_memberships: Vec<TeamMembership>,
}

impl TeamInfo {
    /// First member entry for `user_id`.
    ///
    /// The proxy does not return duplicate entries for a user, so the first
    /// match is authoritative.
    pub fn member(&self, user_id: &str) -> Option<&MemberWithRole> {
        self.members_with_roles
            .iter()
            .find(|m| m.user_id.as_deref() == Some(user_id))
    }

    /// Budget cap configured for `user_id` inside the team, if one is linked.
    pub fn max_budget_for(&self, user_id: &str) -> Option<f64> {
        self.team_memberships
            .iter()
            .find(|m| m.user_id.as_deref() == Some(user_id))
            .and_then(|m| m.litellm_budget_table.as_ref())
            .and_then(|b| b.max_budget)
    }
}

/// Lists the proxy sends as `null` read as empty
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Entry of `members_with_roles`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberWithRole {
    /// User ID (members may be declared by email only)
    #[serde(default)]
    pub user_id: Option<String>,

    /// Role of the member inside the team
    pub role: String,

    /// Email of the member (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
}

/// Entry of `team_memberships`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMembership {
    #[serde(default)]
    pub user_id: Option<String>,

    #[serde(default)]
    pub team_id: Option<String>,

    #[serde(default)]
    pub budget_id: Option<String>,

    /// Budget row referenced by `budget_id`
    #[serde(default)]
    pub litellm_budget_table: Option<BudgetTable>,
}

/// Budget row attached to a team membership
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetTable {
    #[serde(default)]
    pub max_budget: Option<f64>,
}
