//! LiteLLM proxy API client implementation

use async_trait::async_trait;
use log::debug;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client as HttpClient, Method, RequestBuilder, Response, StatusCode};
use serde::Serialize;

use super::api::TeamApi;
use super::models::{MemberAddRequest, MemberDeleteRequest, MemberUpdateRequest, TeamInfo};
use crate::error::{ApiError, Result};

/// LiteLLM proxy API client
///
/// Holds only the base URL and credentials; it is shared read-only by every
/// reconciliation call.
#[derive(Debug, Clone)]
pub struct LitellmClient {
    http: HttpClient,
    base_url: String,
    api_key: Option<String>,
}

impl LitellmClient {
    /// Create a new client for the proxy at `base_url`
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Result<Self> {
        let http = HttpClient::builder()
            .user_agent(concat!("litellm-provider/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self {
            http,
            base_url,
            api_key,
        })
    }

    /// Base URL requests are issued against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build an authenticated request for `path`
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let builder = self.http.request(method, url);
        match &self.api_key {
            Some(key) => builder.bearer_auth(key),
            None => builder,
        }
    }

    /// POST a JSON payload and require a 200 response.
    ///
    /// The response body carries no contract for these endpoints; it is read
    /// to the end and discarded.
    async fn post_json<B: Serialize + Sync>(
        &self,
        path: &str,
        action: &'static str,
        body: &B,
    ) -> Result<()> {
        let payload = serde_json::to_vec(body).map_err(ApiError::from)?;
        debug!("POST {} ({} bytes)", path, payload.len());

        let response = self
            .request(Method::POST, path)
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(reject(response, action).await.into());
        }

        drain(response).await;
        Ok(())
    }
}

/// Turn a non-200 response into a rejection, consuming its body.
async fn reject(response: Response, action: &'static str) -> ApiError {
    let status = response.status().as_u16();
    match response.text().await {
        Ok(body) => debug!("{} rejected with {}: {}", action, status, body),
        Err(e) => debug!("{} rejected with {} (unreadable body: {})", action, status, e),
    }
    ApiError::Rejected { action, status }
}

/// Read a response body to the end so the connection can be reused.
async fn drain(response: Response) {
    if let Err(e) = response.bytes().await {
        debug!("Failed to drain response body: {}", e);
    }
}

#[async_trait]
impl TeamApi for LitellmClient {
    async fn team_info(&self, team_id: &str) -> Result<Option<TeamInfo>> {
        debug!("GET /team/info team_id={}", team_id);

        let response = self
            .request(Method::GET, "/team/info")
            .query(&[("team_id", team_id)])
            .send()
            .await
            .map_err(ApiError::from)?;

        match response.status() {
            StatusCode::OK => {
                let body = response.bytes().await.map_err(ApiError::from)?;
                let info: TeamInfo = serde_json::from_slice(&body).map_err(ApiError::from)?;
                Ok(Some(info))
            }
            StatusCode::NOT_FOUND => {
                drain(response).await;
                Ok(None)
            }
            _ => Err(reject(response, "read team information").await.into()),
        }
    }

    async fn member_add(&self, request: &MemberAddRequest) -> Result<()> {
        self.post_json("/team/member_add", "create team membership", request)
            .await
    }

    async fn member_update(&self, request: &MemberUpdateRequest) -> Result<()> {
        self.post_json("/team/member_update", "update team membership", request)
            .await
    }

    async fn member_delete(&self, request: &MemberDeleteRequest) -> Result<()> {
        self.post_json("/team/member_delete", "delete team membership", request)
            .await
    }
}
