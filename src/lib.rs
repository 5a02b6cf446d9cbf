pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{ClientConfig, EndpointConfig, ErrorExtraction};
pub use crate::core::{FailureKind, FailureReporter, HttpClient, RequestError, Resource, TracingReporter};
pub use domain::model::{NewClass, NewMember, NewPlan};
pub use utils::error::{FitTrackError, Result};
