//! Team API trait for membership operations
//!
//! This trait covers the team endpoints the reconcilers drive:
//! - Read team information including members and roles
//! - Add, update and remove a single member

use async_trait::async_trait;

use crate::client::models::{MemberAddRequest, MemberDeleteRequest, MemberUpdateRequest, TeamInfo};
use crate::error::Result;

/// Team management operations for the LiteLLM proxy API
///
/// Every method performs exactly one HTTP round trip. Nothing is retried.
#[async_trait]
pub trait TeamApi: Send + Sync {
    // ========================================================================
    // Read Operations
    // ========================================================================

    /// Get team information including `members_with_roles`.
    ///
    /// Returns `Ok(None)` when the proxy reports the team does not exist.
    async fn team_info(&self, team_id: &str) -> Result<Option<TeamInfo>>;

    // ========================================================================
    // Write Operations
    // ========================================================================

    /// Add a member to a team.
    async fn member_add(&self, request: &MemberAddRequest) -> Result<()>;

    /// Change the role or budget of an existing member.
    async fn member_update(&self, request: &MemberUpdateRequest) -> Result<()>;

    /// Remove a member from a team.
    async fn member_delete(&self, request: &MemberDeleteRequest) -> Result<()>;
}
