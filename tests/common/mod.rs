#![allow(dead_code)]

use fittrack_client::{ClientConfig, FailureReporter, HttpClient, RequestError};
use httpmock::MockServer;
use reqwest::Method;
use std::sync::{Arc, Mutex};

/// Records every reported failure.
#[derive(Default)]
pub struct RecordingReporter {
    calls: Mutex<Vec<(String, String, Option<u16>)>>,
}

impl RecordingReporter {
    pub fn calls(&self) -> Vec<(String, String, Option<u16>)> {
        self.calls.lock().unwrap().clone()
    }
}

impl FailureReporter for RecordingReporter {
    fn report(&self, method: &Method, url: &str, error: &RequestError) {
        self.calls
            .lock()
            .unwrap()
            .push((method.to_string(), url.to_string(), error.status));
    }
}

/// Client against `<mock server>/api` with a recording reporter.
pub fn client_for(server: &MockServer, config: ClientConfig) -> (HttpClient, Arc<RecordingReporter>) {
    let reporter = Arc::new(RecordingReporter::default());
    let config = ClientConfig {
        base_url: server.url("/api"),
        ..config
    };
    let client = HttpClient::new(config).with_reporter(reporter.clone());
    (client, reporter)
}

/// A base URL nothing listens on.
pub fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/api", port)
}
