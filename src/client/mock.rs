//! Mock team API for testing
//!
//! Provides a mock implementation of [`TeamApi`] for unit testing the
//! reconcilers without making real API calls.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::api::TeamApi;
use super::models::{MemberAddRequest, MemberDeleteRequest, MemberUpdateRequest, TeamInfo};
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// # Example
/// ```ignore
/// let mock = MockTeamApi::new().with_team_info(info).await;
/// let outcome = TeamMembershipResource.read(&mock, &mut state).await?;
/// assert_eq!(mock.call_counts().await.team_info, 1);
/// ```
#[derive(Default)]
pub struct MockTeamApi {
    /// Team returned from team_info; `None` simulates a missing team
    team_info: Arc<Mutex<Option<TeamInfo>>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
    /// Captured requests for test assertions
    captured_requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub team_info: usize,
    pub member_add: usize,
    pub member_update: usize,
    pub member_delete: usize,
}

impl CallCounts {
    /// Get total number of API calls made.
    pub fn total(&self) -> usize {
        self.team_info + self.member_add + self.member_update + self.member_delete
    }
}

/// A captured API request for test assertions.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    /// The API method called (e.g., "member_add")
    pub method: String,
    /// Serialized request body, or the team ID for reads
    pub body: String,
}

impl MockTeamApi {
    /// Create a new mock client with no team configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the team returned from team_info.
    pub async fn with_team_info(self, info: TeamInfo) -> Self {
        *self.team_info.lock().await = Some(info);
        self
    }

    /// Configure an error to return on the next API call.
    /// The error is consumed after one use.
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    /// Get the call counts for verification in tests.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Get all captured requests for test assertions.
    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.captured_requests.lock().await.clone()
    }

    /// Check if there's a pending error and consume it.
    async fn check_error(&self) -> Result<()> {
        let mut error = self.error.lock().await;
        match error.take() {
            Some(e) => Err(e.into()),
            None => Ok(()),
        }
    }

    async fn capture(&self, method: &str, body: String) {
        self.captured_requests.lock().await.push(CapturedRequest {
            method: method.to_string(),
            body,
        });
    }
}

#[async_trait]
impl TeamApi for MockTeamApi {
    async fn team_info(&self, team_id: &str) -> Result<Option<TeamInfo>> {
        self.call_count.lock().await.team_info += 1;
        self.capture("team_info", team_id.to_string()).await;
        self.check_error().await?;
        Ok(self.team_info.lock().await.clone())
    }

    async fn member_add(&self, request: &MemberAddRequest) -> Result<()> {
        self.call_count.lock().await.member_add += 1;
        self.capture("member_add", serde_json::to_string(request)?).await;
        self.check_error().await
    }

    async fn member_update(&self, request: &MemberUpdateRequest) -> Result<()> {
        self.call_count.lock().await.member_update += 1;
        self.capture("member_update", serde_json::to_string(request)?).await;
        self.check_error().await
    }

    async fn member_delete(&self, request: &MemberDeleteRequest) -> Result<()> {
        self.call_count.lock().await.member_delete += 1;
        self.capture("member_delete", serde_json::to_string(request)?).await;
        self.check_error().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_error_is_consumed_once() {
        let mock = MockTeamApi::new()
            .with_error(ApiError::Network("down".to_string()))
            .await;

        assert!(mock.team_info("t1").await.is_err());
        assert!(mock.team_info("t1").await.is_ok());
        assert_eq!(mock.call_counts().await.total(), 2);
    }
}
