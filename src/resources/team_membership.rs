//! `litellm_team_membership` reconciler
//!
//! A membership is the (team_id, user_id) pair on the proxy, with a role and
//! an optional per-member budget. Create, update and delete each issue one
//! POST; read fetches the whole team and picks the member out of it.

use async_trait::async_trait;
use log::debug;

use super::role::{RoleName, validate_team_role};
use super::{Outcome, Resource, ResourceState};
use crate::client::TeamApi;
use crate::client::models::{MemberAddRequest, MemberDeleteRequest, MemberUpdateRequest, NewMember};
use crate::error::{ConfigError, Error, Result};

pub const TYPE_NAME: &str = "litellm_team_membership";

pub const TEAM_ID: &str = "team_id";
pub const USER_ID: &str = "user_id";
pub const ROLE: &str = "role";
pub const MAX_BUDGET_IN_TEAM: &str = "max_budget_in_team";
pub const USER_EMAIL: &str = "user_email";

/// Typed view of a declared membership
#[derive(Debug, Clone, PartialEq)]
struct Membership {
    team_id: String,
    user_id: String,
    role: RoleName,
    max_budget_in_team: Option<f64>,
}

impl Membership {
    /// Extract every field, collecting all problems instead of stopping at the first
    fn from_state(state: &ResourceState) -> std::result::Result<Self, Vec<ConfigError>> {
        let mut errors = Vec::new();

        let team_id = state.require_str(TEAM_ID).map_err(|e| errors.push(e)).ok();
        let user_id = state.require_str(USER_ID).map_err(|e| errors.push(e)).ok();
        let role = state
            .require_str(ROLE)
            .and_then(validate_team_role)
            .map_err(|e| errors.push(e))
            .ok();
        let max_budget_in_team = match state.get_f64(MAX_BUDGET_IN_TEAM) {
            Ok(Some(budget)) if budget < 0.0 => {
                errors.push(ConfigError::NegativeBudget(budget));
                None
            }
            Ok(budget) => budget,
            Err(e) => {
                errors.push(e);
                None
            }
        };

        match (team_id, user_id, role) {
            (Some(team_id), Some(user_id), Some(role)) if errors.is_empty() => Ok(Self {
                team_id: team_id.to_string(),
                user_id: user_id.to_string(),
                role,
                max_budget_in_team,
            }),
            _ => Err(errors),
        }
    }

    /// Budget as sent to the proxy; zero means unset
    fn outgoing_budget(&self) -> Option<f64> {
        self.max_budget_in_team.filter(|b| *b > 0.0)
    }

    fn add_request(&self) -> MemberAddRequest {
        MemberAddRequest {
            member: NewMember {
                role: self.role.to_string(),
                user_id: self.user_id.clone(),
            },
            team_id: self.team_id.clone(),
            max_budget_in_team: self.outgoing_budget(),
        }
    }

    fn update_request(&self) -> MemberUpdateRequest {
        MemberUpdateRequest {
            user_id: self.user_id.clone(),
            role: self.role.to_string(),
            team_id: self.team_id.clone(),
            max_budget_in_team: self.outgoing_budget(),
        }
    }

    fn delete_request(&self) -> MemberDeleteRequest {
        MemberDeleteRequest {
            user_id: self.user_id.clone(),
            team_id: self.team_id.clone(),
        }
    }
}

fn membership(state: &ResourceState) -> Result<Membership> {
    Membership::from_state(state).map_err(Error::Validation)
}

/// Reconciler for team memberships
#[derive(Debug, Clone, Copy, Default)]
pub struct TeamMembershipResource;

#[async_trait]
impl Resource for TeamMembershipResource {
    fn type_name(&self) -> &'static str {
        TYPE_NAME
    }

    fn validate(&self, state: &ResourceState) -> Vec<ConfigError> {
        Membership::from_state(state).err().unwrap_or_default()
    }

    async fn create(&self, api: &dyn TeamApi, state: &mut ResourceState) -> Result<Outcome> {
        let membership = membership(state)?;
        debug!(
            "Adding user {} to team {} as {}",
            membership.user_id, membership.team_id, membership.role
        );

        api.member_add(&membership.add_request()).await?;
        Ok(Outcome::Applied)
    }

    async fn read(&self, api: &dyn TeamApi, state: &mut ResourceState) -> Result<Outcome> {
        let membership = membership(state)?;
        debug!(
            "Reading membership of user {} in team {}",
            membership.user_id, membership.team_id
        );

        let Some(team) = api.team_info(&membership.team_id).await? else {
            debug!("Team {} no longer exists", membership.team_id);
            return Ok(Outcome::NotFound);
        };

        let Some(member) = team.member(&membership.user_id) else {
            debug!(
                "User {} is not a member of team {}",
                membership.user_id, membership.team_id
            );
            return Ok(Outcome::NotFound);
        };

        state.set(ROLE, member.role.clone());
        state.set(USER_EMAIL, member.user_email.clone().unwrap_or_default());
        if let Some(budget) = team.max_budget_for(&membership.user_id) {
            state.set(MAX_BUDGET_IN_TEAM, budget);
        }

        Ok(Outcome::Applied)
    }

    async fn update(&self, api: &dyn TeamApi, state: &mut ResourceState) -> Result<Outcome> {
        let membership = membership(state)?;
        debug!(
            "Updating user {} in team {} to {}",
            membership.user_id, membership.team_id, membership.role
        );

        api.member_update(&membership.update_request()).await?;
        Ok(Outcome::Applied)
    }

    async fn delete(&self, api: &dyn TeamApi, state: &mut ResourceState) -> Result<Outcome> {
        let membership = membership(state)?;
        debug!(
            "Removing user {} from team {}",
            membership.user_id, membership.team_id
        );

        api.member_delete(&membership.delete_request()).await?;
        Ok(Outcome::Applied)
    }
}
