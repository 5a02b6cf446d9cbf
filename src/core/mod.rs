pub mod client;
pub mod resources;

pub use crate::domain::model::{NewClass, NewMember, NewPlan, Resource};
pub use crate::domain::ports::{FailureReporter, TracingReporter};
pub use crate::utils::error::{FailureKind, RequestError};
pub use client::HttpClient;
