use super::{RawResponse, Transport};
use crate::error::{GrokirError, Result};
use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;
use url::Url;

/// Production transport: a blocking `reqwest` client with default timeouts.
///
/// One instance is built per process and reused for every request.
pub struct HttpTransport {
    http: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        let http = Client::builder()
            .build()
            .map_err(|e| GrokirError::Transport(format!("creating HTTP client: {e}")))?;
        Ok(Self { http })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &Url, user_agent: &str) -> Result<RawResponse> {
        let response = self
            .http
            .get(url.clone())
            .header(USER_AGENT, user_agent)
            .send()
            .map_err(|e| GrokirError::Transport(format!("performing request: {e}")))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| GrokirError::Transport(format!("reading response: {e}")))?;
        Ok(RawResponse { status, body })
    }
}
