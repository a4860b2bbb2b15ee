//! reqwest implementation of [`SelectionBackend`].

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{ClientError, Result};
use crate::http_client::HttpUtils;
use crate::traits::SelectionBackend;
use crate::types::{ApiEnvelope, CandidateRecord, ClientConfig, JobStatus, SyncDnsRequest};

const PATH_SELECT: &str = "api/ip/select";
const PATH_SELECT_STATUS: &str = "api/ip/select/status";
const PATH_DNS_SYNC: &str = "api/dns/sync";
const PATH_HEALTH_CHECK: &str = "api/server/health_check";

/// HTTP client for the selection backend.
#[derive(Debug)]
pub struct HttpSelectionBackend {
    client: Client,
    base_url: Url,
}

impl HttpSelectionBackend {
    /// Build a client from configuration.
    ///
    /// The base URL may carry a path prefix; endpoints are resolved below it.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let base_url = normalize_base_url(&config.base_url)?;
        let client = Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| ClientError::NetworkError {
                detail: format!("Failed to create HTTP client: {e}"),
            })?;

        Ok(Self { client, base_url })
    }

    /// Base URL all endpoints are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| ClientError::InvalidUrl {
                url: format!("{}{path}", self.base_url),
                detail: e.to_string(),
            })
    }

    /// Send, check HTTP status, unwrap the envelope.
    async fn call<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        method: &str,
        url: &Url,
    ) -> Result<Option<T>> {
        let (status, text) = HttpUtils::execute_request(request, method, url.as_str()).await?;
        HttpUtils::ensure_success_status(status, &text)?;

        let envelope: ApiEnvelope<T> = HttpUtils::parse_json(&text)?;
        envelope.into_result().inspect_err(|e| {
            log::warn!("{method} {url} rejected: {e}");
        })
    }
}

/// Parse the base URL and make sure its path ends with `/` so `Url::join`
/// appends instead of replacing the last segment.
fn normalize_base_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw.trim()).map_err(|e| ClientError::InvalidUrl {
        url: raw.to_string(),
        detail: e.to_string(),
    })?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

#[async_trait]
impl SelectionBackend for HttpSelectionBackend {
    async fn list_selected(&self) -> Result<Vec<CandidateRecord>> {
        let url = self.endpoint(PATH_SELECT)?;
        let request = self.client.get(url.clone());
        let records: Option<Vec<CandidateRecord>> = self.call(request, "GET", &url).await?;
        Ok(records.unwrap_or_default())
    }

    async fn submit_selection(&self, ranges: &[String]) -> Result<()> {
        let url = self.endpoint(PATH_SELECT)?;
        let request = self.client.post(url.clone()).json(ranges);
        self.call::<serde_json::Value>(request, "POST", &url)
            .await
            .map(|_| ())
    }

    async fn selection_status(&self) -> Result<JobStatus> {
        let url = self.endpoint(PATH_SELECT_STATUS)?;
        let request = self.client.get(url.clone());
        let status: Option<JobStatus> = self.call(request, "GET", &url).await?;
        status.ok_or_else(|| ClientError::ParseError {
            detail: "status response is missing the data field".to_string(),
        })
    }

    async fn sync_dns(&self, ip: &str) -> Result<()> {
        let url = self.endpoint(PATH_DNS_SYNC)?;
        let body = SyncDnsRequest { ip: ip.to_string() };
        let request = self.client.post(url.clone()).json(&body);
        self.call::<serde_json::Value>(request, "POST", &url)
            .await
            .map(|_| ())
    }

    async fn health_check(&self) -> Result<()> {
        let url = self.endpoint(PATH_HEALTH_CHECK)?;
        let request = self.client.get(url.clone());
        self.call::<serde_json::Value>(request, "GET", &url)
            .await
            .map(|_| ())
    }
}
