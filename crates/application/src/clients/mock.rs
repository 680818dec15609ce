use std::sync::Mutex;
use std::time::Duration;

use assay_domain::{RequestSpec, ResponseSpec};
use serde_json::Value;

use crate::ports::{HttpClient, HttpClientError, HttpFuture};

/// Records every request and answers with a fixed response.
pub struct RecordingClient {
    response: Result<ResponseSpec, HttpClientError>,
    pub requests: Mutex<Vec<RequestSpec>>,
}

impl RecordingClient {
    pub fn replying(status: u16, body: &Value) -> Self {
        Self {
            response: Ok(ResponseSpec::json(status, body, Duration::from_millis(15))),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: HttpClientError) -> Self {
        Self {
            response: Err(error),
            requests: Mutex::new(Vec::new()),
        }
    }

    #[allow(clippy::unwrap_used)]
    pub fn last(&self) -> RequestSpec {
        self.requests.lock().unwrap().last().cloned().unwrap()
    }
}

impl HttpClient for RecordingClient {
    #[allow(clippy::unwrap_used)]
    fn execute(&self, request: &RequestSpec) -> HttpFuture<'_> {
        self.requests.lock().unwrap().push(request.clone());
        let response = self.response.clone();
        Box::pin(async move { response })
    }
}
