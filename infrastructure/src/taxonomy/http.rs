//! Remote taxonomy source over HTTP

use async_trait::async_trait;
use prospie_application::{TaxonomyFetchError, TaxonomySourcePort};
use tracing::debug;

/// Maximum taxonomy document size (20 MB)
const MAX_BODY_SIZE: u64 = 20 * 1024 * 1024;

/// User agent sent when none is configured
pub const DEFAULT_USER_AGENT: &str = concat!("prospie/", env!("CARGO_PKG_VERSION"));

/// Taxonomy source that downloads the CSV with a GET request
pub struct HttpTaxonomySource {
    client: reqwest::Client,
    url: String,
    user_agent: String,
}

impl HttpTaxonomySource {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), url)
    }

    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

#[async_trait]
impl TaxonomySourcePort for HttpTaxonomySource {
    fn location(&self) -> String {
        self.url.clone()
    }

    async fn fetch_document(&self) -> Result<String, TaxonomyFetchError> {
        let response = self
            .client
            .get(&self.url)
            .header("User-Agent", &self.user_agent)
            .send()
            .await
            .map_err(|e| TaxonomyFetchError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TaxonomyFetchError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let content_length = response.content_length().unwrap_or(0);
        if content_length > MAX_BODY_SIZE {
            return Err(TaxonomyFetchError::TooLarge {
                size: content_length,
                max: MAX_BODY_SIZE,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| TaxonomyFetchError::Request(e.to_string()))?;
        if body.len() as u64 > MAX_BODY_SIZE {
            return Err(TaxonomyFetchError::TooLarge {
                size: body.len() as u64,
                max: MAX_BODY_SIZE,
            });
        }

        debug!("Downloaded {} bytes from {}", body.len(), self.url);
        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}
