//! Test utilities for barkedlogy-core.
//!
//! Provides a scripted transport that replays canned responses and records
//! every requested URL. Only compiled when running tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use url::Url;

use crate::api::{ApiClient, Transport};
use crate::error::ApiError;

/// Base URL used by [`test_client`].
pub const TEST_BASE_URL: &str = "https://api.test";

enum Scripted {
    Body(String),
    Status(u16),
}

/// Transport that answers requests from a queue of canned responses.
///
/// When the queue is empty every request fails with [`ApiError::Request`].
#[derive(Default)]
pub struct ScriptedTransport {
    responses: RefCell<VecDeque<Scripted>>,
    requests: RefCell<Vec<String>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_body(&self, body: impl Into<String>) {
        self.responses
            .borrow_mut()
            .push_back(Scripted::Body(body.into()));
    }

    pub fn push_status(&self, status: u16) {
        self.responses
            .borrow_mut()
            .push_back(Scripted::Status(status));
    }

    /// URLs requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn get(&self, url: &Url) -> Result<String, ApiError> {
        self.requests.borrow_mut().push(url.to_string());
        match self.responses.borrow_mut().pop_front() {
            Some(Scripted::Body(body)) => Ok(body),
            Some(Scripted::Status(status)) => Err(ApiError::Status {
                status,
                url: url.to_string(),
            }),
            None => Err(ApiError::Request("no scripted response".to_string())),
        }
    }
}

/// Creates a client pointed at [`TEST_BASE_URL`].
pub fn test_client(transport: ScriptedTransport) -> ApiClient<ScriptedTransport> {
    ApiClient::new(
        Url::parse(TEST_BASE_URL).expect("test base URL is valid"),
        transport,
    )
}
