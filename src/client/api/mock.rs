use std::cell::RefCell;
use std::collections::VecDeque;
use reqwest::StatusCode;
use crate::client::api::transport::{ApiRequest, ApiResponse, Transport};
use crate::client::error::ClientError;

/// for test, replays queued responses in order and records every request
#[derive(Default)]
pub(crate) struct MockTransport {
    responses: RefCell<VecDeque<Result<ApiResponse, ClientError>>>,
    requests: RefCell<Vec<ApiRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, status: u16, body: impl Into<String>) -> Self {
        self.responses.borrow_mut().push_back(Ok(ApiResponse {
            status: StatusCode::from_u16(status).unwrap(),
            body: body.into(),
        }));
        self
    }

    pub fn unreachable(self) -> Self {
        self.responses.borrow_mut().push_back(Err(ClientError::Transport {
            reason: "connection refused".to_string(),
        }));
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    /// `METHOD path` of every request sent so far.
    pub fn calls(&self) -> Vec<String> {
        self.requests
            .borrow()
            .iter()
            .map(|r| format!("{} {}", r.method, r.path))
            .collect()
    }
}

impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ClientError> {
        let call = format!("{} {}", request.method, request.path);
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("no response queued for {call}"))
    }
}
