use std::time::Duration;

use futures_util::StreamExt;
use serde::Deserialize;
use tagseek_logging::{seek_debug, seek_trace};
use url::Url;

use crate::{FailureKind, GifItem, SearchError};

pub const DEFAULT_BASE_URL: &str = "https://api.giphy.com/v1/gifs";
pub const DEFAULT_LIMIT: u32 = 10;

#[derive(Debug, Clone)]
pub struct SearchSettings {
    /// Service root; `/search` is appended.
    pub base_url: String,
    pub api_key: String,
    pub limit: u32,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: String::new(),
            limit: DEFAULT_LIMIT,
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 5 * 1024 * 1024,
        }
    }
}

#[async_trait::async_trait]
pub trait GifSearcher: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<GifItem>, SearchError>;
}

#[derive(Debug, Deserialize)]
struct SearchBody {
    data: Vec<ApiGif>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ApiGif {
    id: String,
    title: String,
    url: String,
    images: ApiImages,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ApiImages {
    downsized_medium: Option<ApiImage>,
    original: Option<ApiImage>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ApiImage {
    url: Option<String>,
}

impl From<ApiGif> for GifItem {
    fn from(gif: ApiGif) -> Self {
        let ApiImages {
            downsized_medium,
            original,
        } = gif.images;
        let image_url = downsized_medium
            .and_then(|image| image.url)
            .or_else(|| original.and_then(|image| image.url));
        Self {
            id: gif.id,
            title: gif.title,
            url: gif.url,
            image_url,
        }
    }
}

/// Searches a Giphy-compatible `GET /search` endpoint.
#[derive(Debug, Clone)]
pub struct ReqwestGifSearcher {
    settings: SearchSettings,
    client: reqwest::Client,
}

impl ReqwestGifSearcher {
    pub fn new(settings: SearchSettings) -> Result<Self, SearchError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .map_err(|err| SearchError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    pub fn settings(&self) -> &SearchSettings {
        &self.settings
    }

    /// Full request URL for `query`, credential included.
    pub fn search_url(&self, query: &str) -> Result<Url, SearchError> {
        let base = self.settings.base_url.trim_end_matches('/');
        let mut url = Url::parse(&format!("{base}/search"))
            .map_err(|err| SearchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        url.query_pairs_mut()
            .append_pair("api_key", &self.settings.api_key)
            .append_pair("limit", &self.settings.limit.to_string())
            .append_pair("q", query);
        Ok(url)
    }
}

#[async_trait::async_trait]
impl GifSearcher for ReqwestGifSearcher {
    async fn search(&self, query: &str) -> Result<Vec<GifItem>, SearchError> {
        let url = self.search_url(query)?;
        seek_debug!("GET {}", redact_api_key(&url));

        let response = self.client.get(url).send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let max_bytes = self.settings.max_bytes;
        if let Some(content_len) = response.content_length() {
            if content_len > max_bytes {
                return Err(SearchError::new(
                    FailureKind::TooLarge {
                        max_bytes,
                        actual: Some(content_len),
                    },
                    "response too large",
                ));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > max_bytes {
                return Err(SearchError::new(
                    FailureKind::TooLarge {
                        max_bytes,
                        actual: Some(next_len),
                    },
                    "response too large",
                ));
            }
            bytes.extend_from_slice(&chunk);
        }
        seek_trace!("Search body {} bytes for q={}", bytes.len(), query);

        let body: SearchBody = serde_json::from_slice(&bytes)
            .map_err(|err| SearchError::new(FailureKind::InvalidResponse, err.to_string()))?;
        Ok(body.data.into_iter().map(GifItem::from).collect())
    }
}

/// Renders `url` with the `api_key` query value masked, for logging.
pub fn redact_api_key(url: &Url) -> String {
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(key, value)| {
            let value = if key == "api_key" {
                "REDACTED".to_string()
            } else {
                value.into_owned()
            };
            (key.into_owned(), value)
        })
        .collect();

    let mut redacted = url.clone();
    if !pairs.is_empty() {
        redacted.query_pairs_mut().clear().extend_pairs(pairs);
    }
    redacted.to_string()
}

fn map_reqwest_error(err: reqwest::Error) -> SearchError {
    if err.is_timeout() {
        return SearchError::new(FailureKind::Timeout, err.to_string());
    }
    SearchError::new(FailureKind::Network, err.to_string())
}
