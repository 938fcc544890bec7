//! reqwest client for the Mosquito Coin API.
//!
//! [`ApiClient`] is both the workflow's [`SubmissionTransport`] (multipart
//! `POST /submit`) and the read-only client for profile, leaderboard and
//! transaction data.

use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use mosquito_core::api::{IMAGE_FIELD, USERNAME_FIELD, USERNAME_HEADER};
use mosquito_core::{
    decode_leaderboard, error_message, ApiError, ApiResult, Endpoints, ImageFile,
    LeaderboardEntry, RawResponse, SubmissionRequest, SubmissionTransport, TransactionHistory,
    TransportError, UserProfile,
};

use crate::config::ClientConfig;
use crate::error::{CliError, CliResult};

#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    endpoints: Endpoints,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> CliResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| CliError::HttpClient(e.to_string()))?;

        Ok(Self::with_client(client, config.endpoints()))
    }

    /// Use a preconfigured reqwest client.
    pub fn with_client(client: Client, endpoints: Endpoints) -> Self {
        Self { client, endpoints }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// `GET /user/profile` for `username`.
    pub async fn fetch_profile(&self, username: &str) -> ApiResult<UserProfile> {
        let request = self
            .client
            .get(self.endpoints.profile())
            .header(USERNAME_HEADER, username);
        self.get_json(request).await
    }

    /// `GET /leaderboard`.
    pub async fn fetch_leaderboard(&self) -> ApiResult<Vec<LeaderboardEntry>> {
        let body = self.get_text(self.client.get(self.endpoints.leaderboard())).await?;
        Ok(decode_leaderboard(&body)?)
    }

    /// `GET /transactions/{username}`.
    pub async fn fetch_transactions(&self, username: &str) -> ApiResult<TransactionHistory> {
        let request = self.client.get(self.endpoints.transactions(username));
        self.get_json(request).await
    }

    async fn get_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> ApiResult<T> {
        let body = self.get_text(request).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn get_text(&self, request: RequestBuilder) -> ApiResult<String> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Unreachable(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Unreachable(e.to_string()))?;

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: error_message(status.as_u16(), &body),
            });
        }

        Ok(body)
    }
}

impl SubmissionTransport for ApiClient {
    type File = ImageFile;

    async fn send(
        &self,
        request: SubmissionRequest<'_, ImageFile>,
    ) -> Result<RawResponse, TransportError> {
        let part = Part::bytes(request.file.bytes.clone())
            .file_name(request.file.name.clone())
            .mime_str(&request.file.mime_type)
            .map_err(|e| TransportError::new(format!("Invalid MIME type: {}", e)))?;

        let form = Form::new()
            .part(IMAGE_FIELD, part)
            .text(USERNAME_FIELD, request.username.to_string());

        let url = self.endpoints.submit();
        tracing::debug!(%url, "posting submission");

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| TransportError::new(e.to_string()))?;

        let status = response.status().as_u16();
        tracing::debug!(status, "submission response received");

        match response.text().await {
            Ok(body) => Ok(RawResponse::new(status, body)),
            Err(e) => {
                tracing::warn!(status, "could not read submission response: {}", e);
                Ok(RawResponse::unreadable(status))
            }
        }
    }
}
