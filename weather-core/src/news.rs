//! Local weather news via the Naver news search API.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::fmt::Debug;
use tracing::instrument;

use crate::{
    Config,
    error::{NewsLookupError, truncate_body},
    insight::NewsKeyword,
    model::NewsItem,
    provider::http_client,
};

const NAVER_API_BASE: &str = "https://openapi.naver.com";

/// Maximum number of headlines requested per search.
pub const NEWS_DISPLAY: u8 = 5;

/// Source of recent news headlines for a city and keyword.
#[async_trait]
pub trait NewsSource: Send + Sync + Debug {
    /// Whether this source will actually query anything.
    fn is_enabled(&self) -> bool {
        true
    }

    async fn search(
        &self,
        city: &str,
        keyword: NewsKeyword,
    ) -> Result<Vec<NewsItem>, NewsLookupError>;
}

/// Search string sent to the provider: `"{city} {keyword} 날씨"`.
pub fn news_query(city: &str, keyword: NewsKeyword) -> String {
    format!("{city} {keyword} 날씨")
}

#[derive(Clone)]
pub struct NaverNewsSource {
    credentials: Option<(String, String)>,
    http: Client,
    base_url: String,
}

impl Debug for NaverNewsSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NaverNewsSource")
            .field("enabled", &self.credentials.is_some())
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl NaverNewsSource {
    /// Blank or missing credentials yield a disabled source that never
    /// touches the network.
    pub fn new(client_id: Option<String>, client_secret: Option<String>) -> Self {
        Self::with_client(client_id, client_secret, Client::new())
    }

    pub fn with_client(
        client_id: Option<String>,
        client_secret: Option<String>,
        http: Client,
    ) -> Self {
        let present = |v: Option<String>| v.filter(|s| !s.trim().is_empty());
        let credentials = present(client_id).zip(present(client_secret));

        Self { credentials, http, base_url: NAVER_API_BASE.to_string() }
    }

    pub fn from_config(config: &Config) -> Result<Self, NewsLookupError> {
        let (id, secret) = config
            .news_credentials()
            .map(|(id, secret)| (Some(id.to_owned()), Some(secret.to_owned())))
            .unwrap_or((None, None));

        Ok(Self::with_client(id, secret, http_client(config.request_timeout_secs)?))
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }
}

#[derive(Debug, Deserialize)]
struct NaverItem {
    title: String,
    link: String,
    originallink: String,
}

#[derive(Debug, Deserialize)]
struct NaverResponse {
    #[serde(default)]
    items: Vec<NaverItem>,
}

impl From<NaverItem> for NewsItem {
    fn from(item: NaverItem) -> Self {
        Self { title: item.title, link: item.link, original_link: item.originallink }
    }
}

#[async_trait]
impl NewsSource for NaverNewsSource {
    fn is_enabled(&self) -> bool {
        self.credentials.is_some()
    }

    #[instrument(skip(self), level = "debug")]
    async fn search(
        &self,
        city: &str,
        keyword: NewsKeyword,
    ) -> Result<Vec<NewsItem>, NewsLookupError> {
        let Some((client_id, client_secret)) = &self.credentials else {
            tracing::debug!("News credentials not configured, skipping search");
            return Ok(Vec::new());
        };

        let url = format!("{}/v1/search/news.json", self.base_url);
        let query = news_query(city, keyword);
        let display = NEWS_DISPLAY.to_string();

        let res = self
            .http
            .get(&url)
            .header("X-Naver-Client-Id", client_id.as_str())
            .header("X-Naver-Client-Secret", client_secret.as_str())
            .query(&[("query", query.as_str()), ("display", display.as_str()), ("sort", "date")])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(NewsLookupError::Status { status, body: truncate_body(&body) });
        }

        let parsed: NaverResponse = serde_json::from_str(&body)?;
        tracing::debug!(count = parsed.items.len(), "News search returned");

        Ok(parsed.items.into_iter().take(NEWS_DISPLAY as usize).map(NewsItem::from).collect())
    }
}
