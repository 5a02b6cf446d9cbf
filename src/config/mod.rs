#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

use crate::domain::model::Resource;
use crate::utils::error::Result;
use crate::utils::validation::{validate_endpoint_path, validate_positive_number, validate_url, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000/api";
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Which verbs look for a server-provided reason in failure bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorExtraction {
    /// GET, POST, PUT and DELETE all extract `error` / `message`.
    #[default]
    AllVerbs,
    /// Only POST extracts; the other verbs always report the generic status
    /// message with empty details.
    PostOnly,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    pub members: String,
    pub classes: String,
    pub plans: String,
    pub checkins: String,
    pub subscriptions: String,
    pub payments: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            members: "/members".to_string(),
            classes: "/classes".to_string(),
            plans: "/plans".to_string(),
            checkins: "/checkins".to_string(),
            subscriptions: "/subscriptions".to_string(),
            payments: "/payments".to_string(),
        }
    }
}

impl EndpointConfig {
    pub fn path(&self, resource: Resource) -> &str {
        match resource {
            Resource::Members => &self.members,
            Resource::Classes => &self.classes,
            Resource::Plans => &self.plans,
            Resource::Checkins => &self.checkins,
            Resource::Subscriptions => &self.subscriptions,
            Resource::Payments => &self.payments,
        }
    }

    fn entries(&self) -> [(&'static str, &str); 6] {
        [
            ("endpoints.members", &self.members),
            ("endpoints.classes", &self.classes),
            ("endpoints.plans", &self.plans),
            ("endpoints.checkins", &self.checkins),
            ("endpoints.subscriptions", &self.subscriptions),
            ("endpoints.payments", &self.payments),
        ]
    }
}

/// Process-wide client settings. Built once at startup and read-only after
/// being handed to the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub base_url: String,
    /// Declared by the backend contract; nothing paginates yet.
    pub default_page_size: usize,
    pub error_extraction: ErrorExtraction,
    pub endpoints: EndpointConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            default_page_size: DEFAULT_PAGE_SIZE,
            error_extraction: ErrorExtraction::default(),
            endpoints: EndpointConfig::default(),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
        .normalized()
    }

    pub fn with_error_extraction(mut self, error_extraction: ErrorExtraction) -> Self {
        self.error_extraction = error_extraction;
        self
    }

    /// Strips trailing slashes so `base_url + endpoint` never doubles them.
    pub fn normalized(mut self) -> Self {
        let trimmed = self.base_url.trim().trim_end_matches('/').to_string();
        self.base_url = trimmed;
        self
    }

    pub fn endpoint(&self, resource: Resource) -> &str {
        self.endpoints.path(resource)
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        validate_positive_number("default_page_size", self.default_page_size, 1)?;
        for (field, path) in self.endpoints.entries() {
            validate_endpoint_path(field, path)?;
        }
        Ok(())
    }
}
