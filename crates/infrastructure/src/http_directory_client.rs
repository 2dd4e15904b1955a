use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use teamroles_core::{AppError, AppResult};

/// JSON-over-HTTP reader shared by the directory adapters.
///
/// A `404` response or a `null` body is reported as absent. Every other
/// non-success status and every transport failure is an internal error. No
/// retries are attempted.
#[derive(Debug, Clone)]
pub(crate) struct DirectoryHttpClient {
    http_client: reqwest::Client,
    base_url: Url,
}

impl DirectoryHttpClient {
    pub(crate) fn new(http_client: reqwest::Client, mut base_url: Url) -> Self {
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(path.as_str());
        }

        Self {
            http_client,
            base_url,
        }
    }

    fn endpoint(&self, path: &str) -> AppResult<Url> {
        self.base_url.join(path).map_err(|error| {
            AppError::Internal(format!("invalid directory endpoint '{path}': {error}"))
        })
    }

    async fn get(&self, path: &str) -> AppResult<(Url, reqwest::Response)> {
        let url = self.endpoint(path)?;
        debug!(url = %url, "querying directory");

        let response = self
            .http_client
            .get(url.clone())
            .send()
            .await
            .map_err(|error| {
                warn!(url = %url, error = %error, "directory request failed");
                AppError::Internal(format!("directory request to '{url}' failed: {error}"))
            })?;

        Ok((url, response))
    }

    /// Fetches one resource, mapping "not found" to `None`.
    pub(crate) async fn fetch_optional<T>(&self, path: &str) -> AppResult<Option<T>>
    where
        T: DeserializeOwned,
    {
        let (url, response) = self.get(path).await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(unexpected_status(&url, status));
        }

        response
            .json::<Option<T>>()
            .await
            .map_err(|error| invalid_body(&url, &error))
    }

    /// Fetches a collection; a `null` body is an empty collection.
    pub(crate) async fn fetch_list<T>(&self, path: &str) -> AppResult<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let (url, response) = self.get(path).await?;
        let status = response.status();

        if !status.is_success() {
            return Err(unexpected_status(&url, status));
        }

        Ok(response
            .json::<Option<Vec<T>>>()
            .await
            .map_err(|error| invalid_body(&url, &error))?
            .unwrap_or_default())
    }
}

fn unexpected_status(url: &Url, status: StatusCode) -> AppError {
    warn!(url = %url, status = %status, "directory answered with unexpected status");
    AppError::Internal(format!(
        "directory request to '{url}' failed with status {status}"
    ))
}

fn invalid_body(url: &Url, error: &reqwest::Error) -> AppError {
    warn!(url = %url, error = %error, "directory answered with an unreadable body");
    AppError::Internal(format!(
        "directory response from '{url}' could not be decoded: {error}"
    ))
}
