//! Resource reconcilers
//!
//! Each resource type maps declared state onto calls against the proxy API
//! and reads remote state back for drift detection. Reconcilers hold no
//! state between calls; the API client is passed into every operation.

use std::fmt;

use async_trait::async_trait;

use crate::client::TeamApi;
use crate::error::{ConfigError, Error, Result};

pub mod role;
pub mod state;
pub mod team_membership;
pub mod user;

pub use role::RoleName;
pub use state::ResourceState;
pub use team_membership::TeamMembershipResource;
pub use user::UserResource;

/// Resource type names served by this provider
pub const TYPE_NAMES: [&str; 2] = [team_membership::TYPE_NAME, user::TYPE_NAME];

/// Lifecycle operation of a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Read,
    Update,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Create => "create",
            Operation::Read => "read",
            Operation::Update => "update",
            Operation::Delete => "delete",
        };
        f.write_str(name)
    }
}

/// Result of one successful reconciliation call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The remote call succeeded; for reads, observed values were written back
    Applied,
    /// Read found no remote record; declared state was left untouched
    NotFound,
    /// The resource type has no remote implementation; nothing was done
    Unsupported {
        resource: &'static str,
        operation: Operation,
    },
}

/// A resource type the provider can reconcile
#[async_trait]
pub trait Resource: Send + Sync {
    /// Resource type name as declared by users
    fn type_name(&self) -> &'static str;

    /// Collect every configuration problem in `state` without touching the network
    fn validate(&self, _state: &ResourceState) -> Vec<ConfigError> {
        Vec::new()
    }

    async fn create(&self, api: &dyn TeamApi, state: &mut ResourceState) -> Result<Outcome>;

    async fn read(&self, api: &dyn TeamApi, state: &mut ResourceState) -> Result<Outcome>;

    async fn update(&self, api: &dyn TeamApi, state: &mut ResourceState) -> Result<Outcome>;

    async fn delete(&self, api: &dyn TeamApi, state: &mut ResourceState) -> Result<Outcome>;
}

/// Look up a resource type by name
pub fn lookup(type_name: &str) -> Option<Box<dyn Resource>> {
    match type_name {
        team_membership::TYPE_NAME => Some(Box::new(TeamMembershipResource)),
        user::TYPE_NAME => Some(Box::new(UserResource)),
        _ => None,
    }
}

/// Validate `state`, then run `operation` against the API.
///
/// Configuration errors are reported before any request is made.
pub async fn apply(
    resource: &dyn Resource,
    operation: Operation,
    api: &dyn TeamApi,
    state: &mut ResourceState,
) -> Result<Outcome> {
    let errors = resource.validate(state);
    if !errors.is_empty() {
        return Err(Error::Validation(errors));
    }

    match operation {
        Operation::Create => resource.create(api, state).await,
        Operation::Read => resource.read(api, state).await,
        Operation::Update => resource.update(api, state).await,
        Operation::Delete => resource.delete(api, state).await,
    }
}
