//! HTTP client for network-based member API calls

use reqwest::{Client, StatusCode};
use serde::{Deserialize, de::DeserializeOwned};

use shared::{Member, MemberList, MemberPayload};

use crate::{ClientConfig, ClientError, ClientResult};

/// Error envelope the server attaches to failure responses
#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// HTTP client for making requests to the member service
#[derive(Debug, Clone)]
pub struct MemberClient {
    client: Client,
    base_url: String,
    credentials: Option<(String, String)>,
}

impl MemberClient {
    /// Create a new client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
            credentials: config.credentials.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Attach Basic-Auth credentials when configured
    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.credentials {
            Some((username, password)) => request.basic_auth(username, Some(password)),
            None => request,
        }
    }

    // ========== Member API ==========

    /// GET /members - list every member (projected view)
    pub async fn list_members(&self) -> ClientResult<MemberList> {
        let response = self
            .authorize(self.client.get(self.url("members")))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// GET /members/{id} - fetch one member in full
    pub async fn get_member(&self, id: i64) -> ClientResult<Member> {
        let response = self
            .authorize(self.client.get(self.url(&format!("members/{id}"))))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// POST /members - create a member, returning the stored record
    pub async fn create_member(&self, payload: &MemberPayload) -> ClientResult<Member> {
        let response = self
            .authorize(self.client.post(self.url("members")).json(payload))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// PUT /members/{id} - full replace, no body on success
    pub async fn update_member(&self, id: i64, payload: &MemberPayload) -> ClientResult<()> {
        let response = self
            .authorize(
                self.client
                    .put(self.url(&format!("members/{id}")))
                    .json(payload),
            )
            .send()
            .await?;
        Self::expect_no_content(response).await
    }

    /// DELETE /members/{id} - no body on success
    pub async fn delete_member(&self, id: i64) -> ClientResult<()> {
        let response = self
            .authorize(self.client.delete(self.url(&format!("members/{id}"))))
            .send()
            .await?;
        Self::expect_no_content(response).await
    }

    // ========== Response handling ==========

    /// Handle a JSON response
    async fn parse_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let message = Self::lift_error_message(response.text().await?);
            return Err(Self::status_error(status, message));
        }

        response.json().await.map_err(Into::into)
    }

    /// Handle a bodyless (204) response
    async fn expect_no_content(response: reqwest::Response) -> ClientResult<()> {
        let status = response.status();

        if !status.is_success() {
            let message = Self::lift_error_message(response.text().await?);
            return Err(Self::status_error(status, message));
        }

        Ok(())
    }

    /// Lift the message out of the server's error envelope; fall back to
    /// the raw body text when it is not the expected JSON
    fn lift_error_message(text: String) -> String {
        match serde_json::from_str::<ErrorBody>(&text) {
            Ok(body) => body.message,
            Err(_) => text,
        }
    }

    fn status_error(status: StatusCode, message: String) -> ClientError {
        tracing::debug!(%status, message, "Request rejected");
        match status {
            StatusCode::UNAUTHORIZED => ClientError::Unauthorized,
            StatusCode::FORBIDDEN => ClientError::Forbidden(message),
            StatusCode::NOT_FOUND => ClientError::NotFound(message),
            StatusCode::BAD_REQUEST => ClientError::Validation(message),
            _ => ClientError::Internal(message),
        }
    }
}
