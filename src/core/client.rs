use crate::config::{ClientConfig, ErrorExtraction};
use crate::domain::ports::{FailureReporter, TracingReporter};
use crate::utils::error::{empty_details, RequestError};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method};
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// JSON-over-HTTP client for the FitTrack backend.
///
/// Every call is one request/response exchange: no retries, no timeout, no
/// caching. Failures are normalized into [`RequestError`], passed to the
/// configured [`FailureReporter`] once, then returned.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    config: Arc<ClientConfig>,
    reporter: Arc<dyn FailureReporter>,
}

impl HttpClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: Client::new(),
            config: Arc::new(config.normalized()),
            reporter: Arc::new(TracingReporter),
        }
    }

    pub fn with_reporter(mut self, reporter: Arc<dyn FailureReporter>) -> Self {
        self.reporter = reporter;
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn url_for(&self, endpoint: &str) -> String {
        format!("{}{}", self.config.base_url, endpoint)
    }

    pub async fn get(&self, endpoint: &str) -> Result<Value, RequestError> {
        self.execute(Method::GET, self.url_for(endpoint), None).await
    }

    pub async fn post<B: Serialize + ?Sized>(&self, endpoint: &str, body: &B) -> Result<Value, RequestError> {
        self.send_json(Method::POST, endpoint, body).await
    }

    pub async fn put<B: Serialize + ?Sized>(&self, endpoint: &str, body: &B) -> Result<Value, RequestError> {
        self.send_json(Method::PUT, endpoint, body).await
    }

    pub async fn delete(&self, endpoint: &str) -> Result<Value, RequestError> {
        self.execute(Method::DELETE, self.url_for(endpoint), None).await
    }

    async fn send_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        endpoint: &str,
        body: &B,
    ) -> Result<Value, RequestError> {
        let url = self.url_for(endpoint);
        match serde_json::to_vec(body) {
            Ok(bytes) => self.execute(method, url, Some(bytes)).await,
            Err(e) => Err(self.fail(&method, &url, RequestError::encode(&e))),
        }
    }

    async fn execute(&self, method: Method, url: String, body: Option<Vec<u8>>) -> Result<Value, RequestError> {
        tracing::debug!("📡 {} {}", method, url);
        self.round_trip(&method, &url, body)
            .await
            .map_err(|err| self.fail(&method, &url, err))
    }

    async fn round_trip(&self, method: &Method, url: &str, body: Option<Vec<u8>>) -> Result<Value, RequestError> {
        let mut request = self.client.request(method.clone(), url);
        if let Some(body) = body {
            request = request.header(CONTENT_TYPE, "application/json").body(body);
        }

        let response = request.send().await.map_err(|e| RequestError::transport(&e))?;
        let status = response.status();
        tracing::debug!("📡 {} {} -> {}", method, url, status);

        let bytes = response.bytes().await.map_err(|e| RequestError::transport(&e))?;

        if status.is_success() {
            decode_success(status.as_u16(), &bytes)
        } else {
            Err(normalize_failure(status.as_u16(), &bytes, self.extracts_reason(method)))
        }
    }

    fn extracts_reason(&self, method: &Method) -> bool {
        match self.config.error_extraction {
            ErrorExtraction::AllVerbs => true,
            ErrorExtraction::PostOnly => *method == Method::POST,
        }
    }

    fn fail(&self, method: &Method, url: &str, err: RequestError) -> RequestError {
        self.reporter.report(method, url, &err);
        err
    }
}

impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// An empty success body (e.g. 204) decodes to `null`.
fn decode_success(status: u16, body: &[u8]) -> Result<Value, RequestError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(body).map_err(|e| RequestError::decode(status, &e))
}

/// Turn a non-success response into a `RequestError`.
///
/// With `extract` set, the body is parsed as JSON (falling back to `{}`) and a
/// non-empty string under `error`, then `message`, becomes the message.
/// Without it, the generic status message and empty details are used.
fn normalize_failure(status: u16, body: &[u8], extract: bool) -> RequestError {
    if !extract {
        return RequestError::http_status(status, empty_details());
    }

    let details: Value = serde_json::from_slice(body).unwrap_or_else(|_| empty_details());
    match server_reason(&details) {
        Some(reason) => RequestError::structured(status, reason, details),
        None => RequestError::http_status(status, details),
    }
}

fn server_reason(details: &Value) -> Option<String> {
    ["error", "message"].iter().find_map(|key| {
        details
            .get(*key)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    })
}
