use super::error::RequestError;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

/// Thin wrapper around `reqwest::Client` shared by every API operation.
///
/// The base URL is either fixed at construction (tests, embedded
/// deployments) or resolved lazily from the runtime config on first use.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.trim_end_matches('/').to_string()),
        }
    }

    pub(super) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(super) async fn resolved_base_url(&self) -> String {
        match &self.base_url {
            Some(fixed) => fixed.clone(),
            None => crate::config::await_api_base_url().await,
        }
    }

    /// Normalizes every response the same way: 2xx bodies parse into the
    /// typed shape, everything else becomes a `RequestError` built from
    /// the body's `detail` field when present.
    pub(super) async fn read_json<T: DeserializeOwned>(
        response: Response,
    ) -> Result<T, RequestError> {
        let status = response.status();
        if status.is_success() {
            response
                .json::<T>()
                .await
                .map_err(|e| RequestError::new(format!("Failed to parse response: {e}")))
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(RequestError::from_response(status.as_u16(), &body))
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
