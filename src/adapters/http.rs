use crate::core::{BasecampApi, ConfigProvider};
use crate::utils::error::{Result, SyncError};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder};

/// Basecamp ignores the basic-auth password when a token is the username.
const UNUSED_PASSWORD: &str = "NOTUSED";

pub struct BasecampClient {
    client: Client,
    base_url: String,
    token: String,
}

impl BasecampClient {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/xml"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/xml"));

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        })
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        Self::new(config.base_url(), config.token())
    }

    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn send(&self, url: &str, request: RequestBuilder) -> Result<String> {
        tracing::info!("Calling URL {}", url);
        let response = request
            .basic_auth(&self.token, Some(UNUSED_PASSWORD))
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|e| {
                tracing::warn!("Could not read error body from {}: {}", url, e);
                String::new()
            });
            tracing::error!("Basecamp API error {} for {}:\n{}", status, url, body);
            return Err(SyncError::Remote {
                url: url.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl BasecampApi for BasecampClient {
    async fn get_xml(&self, path: &str) -> Result<String> {
        let url = self.url_for(path);
        self.send(&url, self.client.get(&url)).await
    }

    async fn post_xml(&self, path: &str, body: String) -> Result<String> {
        let url = self.url_for(path);
        self.send(&url, self.client.post(&url).body(body)).await
    }
}
