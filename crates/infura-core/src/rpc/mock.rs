use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::InfuraError;

use super::Transport;

/// A request captured by [`MockTransport`].
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub url: String,
    pub body: serde_json::Value,
}

/// A transport for tests. Replays canned response bodies in order and
/// records every request it is handed.
pub struct MockTransport {
    responses: Mutex<VecDeque<String>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockTransport {
    pub fn builder() -> MockTransportBuilder {
        MockTransportBuilder {
            responses: VecDeque::new(),
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().expect("mock lock poisoned").clone()
    }
}

pub struct MockTransportBuilder {
    responses: VecDeque<String>,
}

impl MockTransportBuilder {
    pub fn with_response(mut self, body: serde_json::Value) -> Self {
        self.responses.push_back(body.to_string());
        self
    }

    pub fn with_raw_response(mut self, body: &str) -> Self {
        self.responses.push_back(body.to_owned());
        self
    }

    pub fn build(self) -> MockTransport {
        MockTransport {
            responses: Mutex::new(self.responses),
            requests: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<String, InfuraError> {
        let body = serde_json::from_str(&body)?;
        self.requests
            .lock()
            .expect("mock lock poisoned")
            .push(RecordedRequest {
                url: url.to_owned(),
                body,
            });

        self.responses
            .lock()
            .expect("mock lock poisoned")
            .pop_front()
            .ok_or_else(|| {
                InfuraError::InvalidResponse("mock transport has no response queued".into())
            })
    }
}
