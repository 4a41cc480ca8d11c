//! LiteLLM proxy API client

pub mod api;
pub mod litellm;
#[cfg(test)]
pub mod mock;
pub mod models;

pub use api::TeamApi;
pub use litellm::LitellmClient;
#[cfg(test)]
pub use mock::MockTeamApi;
