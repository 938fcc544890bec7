//! Browser HTTP client for the Mosquito Coin API.
//!
//! [`BrowserClient`] posts submissions as `FormData` and fetches the
//! read-only views. Error mapping matches the native client so the UI
//! can show the same messages.

use gloo_net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;
use web_sys::FormData;

use mosquito_core::api::{IMAGE_FIELD, USERNAME_FIELD, USERNAME_HEADER};
use mosquito_core::{
    decode_leaderboard, error_message, ApiError, ApiResult, Endpoints, FileCandidate,
    LeaderboardEntry, RawResponse, SubmissionRequest, SubmissionTransport, TransactionHistory,
    TransportError, UserProfile,
};

use crate::config;
use crate::types::BrowserFile;

#[derive(Clone, Debug)]
pub struct BrowserClient {
    endpoints: Endpoints,
}

impl BrowserClient {
    pub fn new(endpoints: Endpoints) -> Self {
        Self { endpoints }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub async fn fetch_profile(&self, username: &str) -> ApiResult<UserProfile> {
        let request = Request::get(&self.endpoints.profile()).header(USERNAME_HEADER, username);
        get_json(request).await
    }

    pub async fn fetch_leaderboard(&self) -> ApiResult<Vec<LeaderboardEntry>> {
        let body = get_text(Request::get(&self.endpoints.leaderboard())).await?;
        Ok(decode_leaderboard(&body)?)
    }

    pub async fn fetch_transactions(&self, username: &str) -> ApiResult<TransactionHistory> {
        get_json(Request::get(&self.endpoints.transactions(username))).await
    }
}

impl Default for BrowserClient {
    fn default() -> Self {
        Self::new(config::endpoints())
    }
}

impl SubmissionTransport for BrowserClient {
    type File = BrowserFile;

    async fn send(
        &self,
        request: SubmissionRequest<'_, BrowserFile>,
    ) -> Result<RawResponse, TransportError> {
        let form_data = FormData::new()
            .map_err(|e| TransportError::new(format!("Failed to create FormData: {:?}", e)))?;

        form_data
            .append_with_blob_and_filename(
                IMAGE_FIELD,
                request.file.inner(),
                request.file.file_name(),
            )
            .map_err(|e| TransportError::new(format!("Failed to append file: {:?}", e)))?;
        form_data
            .append_with_str(USERNAME_FIELD, request.username)
            .map_err(|e| TransportError::new(format!("Failed to append username: {:?}", e)))?;

        let url = self.endpoints.submit();
        log::debug!("📤 POST {}", url);

        // Content-Type and boundary come from the browser
        let response = Request::post(&url)
            .body(form_data)
            .map_err(|e| TransportError::new(format!("Failed to build request: {}", e)))?
            .send()
            .await
            .map_err(|e| TransportError::new(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        match response.text().await {
            Ok(body) => Ok(RawResponse::new(status, body)),
            Err(e) => {
                log::warn!("Could not read submission response ({}): {}", status, e);
                Ok(RawResponse::unreadable(status))
            }
        }
    }
}

async fn get_json<T: DeserializeOwned>(request: RequestBuilder) -> ApiResult<T> {
    let body = get_text(request).await?;
    Ok(serde_json::from_str(&body)?)
}

async fn get_text(request: RequestBuilder) -> ApiResult<String> {
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Unreachable(e.to_string()))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Unreachable(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status {
            status,
            message: error_message(status, &body),
        });
    }

    Ok(body)
}
