use super::{RawResponse, Transport};
use crate::error::{GrokirError, Result};
use reqwest::StatusCode;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use url::Url;

/// A request as seen by [`MemoryTransport`].
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub url: Url,
    pub user_agent: String,
}

#[derive(Debug, Default)]
struct State {
    responses: VecDeque<RawResponse>,
    requests: Vec<RecordedRequest>,
}

/// Serves canned responses without touching the network.
///
/// Responses are handed out in order; the last one keeps being served once
/// the queue is down to a single entry. Clones share the same state, so a test
/// can keep a handle while the client owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryTransport {
    state: Rc<RefCell<State>>,
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn responding(status: StatusCode, body: impl Into<String>) -> Self {
        Self::new().with_response(status, body)
    }

    pub fn with_response(self, status: StatusCode, body: impl Into<String>) -> Self {
        self.state
            .borrow_mut()
            .responses
            .push_back(RawResponse::new(status, body));
        self
    }

    /// Every request received so far, oldest first.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.borrow().requests.clone()
    }
}

impl Transport for MemoryTransport {
    fn get(&self, url: &Url, user_agent: &str) -> Result<RawResponse> {
        let mut state = self.state.borrow_mut();
        state.requests.push(RecordedRequest {
            url: url.clone(),
            user_agent: user_agent.to_string(),
        });

        let response = if state.responses.len() > 1 {
            state.responses.pop_front()
        } else {
            state.responses.front().cloned()
        };
        response.ok_or_else(|| {
            GrokirError::Transport(format!("performing request: no response for {url}"))
        })
    }
}
