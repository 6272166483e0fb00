//! # API Client
//!
//! A minimal client for the Grokipedia REST API. It knows two endpoints:
//!
//! - `GET /api/full-text-search?query=..&limit=..&offset=..`
//! - `GET /api/page?slug=..&includeContent=..&validateLinks=..`
//!
//! The client builds the request URL, hands it to a [`Transport`], and turns
//! the raw response into typed results or a [`GrokirError`].
//!
//! ## Transports
//!
//! Sending bytes over the wire is abstracted behind the [`Transport`] trait:
//! - [`http::HttpTransport`]: production transport on top of blocking `reqwest`
//! - [`memory::MemoryTransport`]: canned responses for tests, records every URL
//!
//! ## Not Found
//!
//! The page endpoint signals a missing page either with a 404 or with a 200
//! whose envelope carries `found: false` (or a null `page`). Both map to
//! [`GrokirError::NotFound`]; a caller never receives an empty page.

use crate::config::GrokirConfig;
use crate::error::{GrokirError, Result};
use crate::model::{Page, SearchResult};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, trace};
use url::Url;

pub mod http;
pub mod memory;

pub const DEFAULT_BASE_URL: &str = "https://grokipedia.com";
pub const DEFAULT_USER_AGENT: &str = concat!(
    "grokir/",
    env!("CARGO_PKG_VERSION"),
    " (Rust Grokipedia CLI)"
);

pub const SEARCH_PATH: &str = "/api/full-text-search";
pub const PAGE_PATH: &str = "/api/page";

/// Status line and body of an HTTP response.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Performs a single GET request.
///
/// Implementations report failures to build or send the request as
/// [`GrokirError::Transport`]; any status code is a successful exchange.
pub trait Transport {
    fn get(&self, url: &Url, user_agent: &str) -> Result<RawResponse>;
}

#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    #[serde(default)]
    results: Option<Vec<SearchResult>>,
}

#[derive(Debug, Deserialize)]
struct PageEnvelope {
    #[serde(default)]
    found: bool,
    #[serde(default)]
    page: Option<Page>,
}

pub struct Client {
    base_url: String,
    user_agent: String,
    transport: Box<dyn Transport>,
}

impl Client {
    /// Client talking to the configured API over HTTP.
    pub fn new(config: &GrokirConfig) -> Result<Self> {
        Ok(Self::with_transport(config, http::HttpTransport::new()?))
    }

    pub fn with_transport<T: Transport + 'static>(config: &GrokirConfig, transport: T) -> Self {
        Self {
            base_url: config.base_url.clone(),
            user_agent: config.user_agent.clone(),
            transport: Box::new(transport),
        }
    }

    /// Full-text search. `limit` and `offset` are only sent when positive.
    ///
    /// No matches is not an error: the result is simply empty.
    pub fn search(&self, query: &str, limit: i64, offset: i64) -> Result<Vec<SearchResult>> {
        let mut url = self.endpoint(SEARCH_PATH)?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("query", query);
            if limit > 0 {
                pairs.append_pair("limit", &limit.to_string());
            }
            if offset > 0 {
                pairs.append_pair("offset", &offset.to_string());
            }
        }

        let response = self.send(&url)?;
        if response.status != StatusCode::OK {
            return Err(GrokirError::Server {
                action: "search",
                status: response.status,
            });
        }

        let envelope: SearchEnvelope = decode(&response.body)?;
        let results = envelope.results.unwrap_or_default();
        debug!(count = results.len(), "search returned");
        Ok(results)
    }

    /// Fetch a page by slug.
    pub fn get_page(&self, slug: &str, include_content: bool, validate_links: bool) -> Result<Page> {
        let mut url = self.endpoint(PAGE_PATH)?;
        url.query_pairs_mut()
            .append_pair("slug", slug)
            .append_pair("includeContent", &include_content.to_string())
            .append_pair("validateLinks", &validate_links.to_string());

        let response = self.send(&url)?;
        if response.status == StatusCode::NOT_FOUND {
            return Err(GrokirError::NotFound(slug.to_string()));
        }
        if response.status != StatusCode::OK {
            return Err(GrokirError::Server {
                action: "get page",
                status: response.status,
            });
        }

        let envelope: PageEnvelope = decode(&response.body)?;
        match envelope.page {
            Some(page) if envelope.found => Ok(page),
            _ => {
                debug!(slug, found = envelope.found, "page missing from envelope");
                Err(GrokirError::NotFound(slug.to_string()))
            }
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| GrokirError::Transport(format!("invalid base URL: {e}")))?;
        if url.cannot_be_a_base() {
            return Err(GrokirError::Transport(format!(
                "invalid base URL: {}",
                self.base_url
            )));
        }
        url.set_path(path);
        Ok(url)
    }

    fn send(&self, url: &Url) -> Result<RawResponse> {
        debug!(%url, "GET");
        let response = self.transport.get(url, &self.user_agent)?;
        trace!(status = %response.status, bytes = response.body.len(), "response");
        Ok(response)
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| GrokirError::Decode(e.to_string()))
}
