use crate::utils::error::RequestError;
use reqwest::Method;

/// Sees every failed request exactly once, before the error is handed back
/// to the caller. Reporting never suppresses the failure.
pub trait FailureReporter: Send + Sync {
    fn report(&self, method: &Method, url: &str, error: &RequestError);
}

/// Default reporter: one `tracing` error event per failure.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl FailureReporter for TracingReporter {
    fn report(&self, method: &Method, url: &str, error: &RequestError) {
        tracing::error!(
            method = %method,
            url = %url,
            status = ?error.status,
            kind = ?error.kind,
            details = %error.details,
            "❌ {} request failed: {}",
            method,
            error.message
        );
    }
}
