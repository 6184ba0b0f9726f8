use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use url::Url;

use super::{StoreError, SubmissionStore};
use crate::assessment::domain::Submission;
use crate::config::StoreConfig;

/// Writes submissions to a PostgREST-style endpoint
/// (`POST {base}/rest/v1/{table}` with a one-element JSON array body).
#[derive(Debug, Clone)]
pub struct RestSubmissionStore {
    client: reqwest::Client,
    endpoint: Url,
    api_key: String,
}

impl RestSubmissionStore {
    pub fn new(
        base_url: &Url,
        table: &str,
        api_key: impl Into<String>,
    ) -> Result<Self, StoreError> {
        let endpoint = base_url
            .join(&format!("rest/v1/{table}"))
            .map_err(|err| StoreError::Transport(format!("invalid store endpoint: {err}")))?;

        Ok(Self {
            client: reqwest::Client::new(),
            endpoint,
            api_key: api_key.into(),
        })
    }

    pub fn from_config(config: &StoreConfig) -> Result<Option<Self>, StoreError> {
        match &config.base_url {
            Some(base_url) => Self::new(base_url, &config.table, config.api_key.clone()).map(Some),
            None => Ok(None),
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn headers(&self) -> Result<HeaderMap, StoreError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert("Prefer", HeaderValue::from_static("return=minimal"));

        if !self.api_key.is_empty() {
            let key = HeaderValue::from_str(&self.api_key)
                .map_err(|err| StoreError::Transport(format!("invalid api key header: {err}")))?;
            let bearer = HeaderValue::from_str(&format!("Bearer {}", self.api_key))
                .map_err(|err| StoreError::Transport(format!("invalid api key header: {err}")))?;
            headers.insert("apikey", key);
            headers.insert(AUTHORIZATION, bearer);
        }

        Ok(headers)
    }
}

impl SubmissionStore for RestSubmissionStore {
    async fn insert(&self, submission: Submission) -> Result<(), StoreError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .headers(self.headers()?)
            .json(&[submission])
            .send()
            .await
            .map_err(|err| StoreError::Transport(err.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(StoreError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}
