//! `litellm_user` reconciler
//!
//! Users have no remote implementation yet. Every operation reports
//! [`Outcome::Unsupported`] so callers can tell it apart from a reconciled
//! resource; no request is made and the declared state is not touched.

use async_trait::async_trait;
use log::warn;

use super::{Operation, Outcome, Resource, ResourceState};
use crate::client::TeamApi;
use crate::error::Result;

pub const TYPE_NAME: &str = "litellm_user";

/// Placeholder reconciler for users
#[derive(Debug, Clone, Copy, Default)]
pub struct UserResource;

impl UserResource {
    fn unsupported(operation: Operation) -> Result<Outcome> {
        warn!("{} is not implemented for {}; nothing was done", operation, TYPE_NAME);
        Ok(Outcome::Unsupported {
            resource: TYPE_NAME,
            operation,
        })
    }
}

#[async_trait]
impl Resource for UserResource {
    fn type_name(&self) -> &'static str {
        TYPE_NAME
    }

    async fn create(&self, _api: &dyn TeamApi, _state: &mut ResourceState) -> Result<Outcome> {
        Self::unsupported(Operation::Create)
    }

    async fn read(&self, _api: &dyn TeamApi, _state: &mut ResourceState) -> Result<Outcome> {
        Self::unsupported(Operation::Read)
    }

    async fn update(&self, _api: &dyn TeamApi, _state: &mut ResourceState) -> Result<Outcome> {
        Self::unsupported(Operation::Update)
    }

    async fn delete(&self, _api: &dyn TeamApi, _state: &mut ResourceState) -> Result<Outcome> {
        Self::unsupported(Operation::Delete)
    }
}
