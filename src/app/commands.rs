use crate::app::render::{render_list, render_record};
use crate::config::cli::{CheckinAction, ClassAction, Command, MemberAction, PlanAction};
use crate::core::HttpClient;
use crate::domain::model::{NewClass, NewMember, NewPlan, Resource};
use crate::utils::error::{FailureKind, RequestError};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Get,
    Add,
}

/// A failed command: the line shown to the user plus the underlying error.
#[derive(Error, Debug)]
#[error("{headline}")]
pub struct CommandFailure {
    pub headline: String,
    #[source]
    pub error: RequestError,
}

impl CommandFailure {
    pub fn new(resource: Resource, operation: Operation, error: RequestError) -> Self {
        Self {
            headline: failure_message(resource, operation, &error),
            error,
        }
    }
}

/// Run one CLI command against the shared client and return its output.
pub async fn run(client: &HttpClient, command: Command, json: bool) -> Result<String, CommandFailure> {
    match command {
        Command::Members { action } => match action {
            MemberAction::List => list(Resource::Members, client.get_members().await, json),
            MemberAction::Get { id } => single(Resource::Members, Operation::Get, client.get_member(&id).await, json),
            MemberAction::Create(args) => {
                let member = NewMember::from(args);
                created(Resource::Members, client.create_member(&member).await, json)
            }
        },
        Command::Classes { action } => match action {
            ClassAction::List => list(Resource::Classes, client.get_classes().await, json),
            ClassAction::Create(args) => {
                let class = NewClass::from(args);
                created(Resource::Classes, client.create_class(&class).await, json)
            }
        },
        Command::Plans { action } => match action {
            PlanAction::List => list(Resource::Plans, client.get_plans().await, json),
            PlanAction::Create(args) => {
                let plan = NewPlan::from(args);
                created(Resource::Plans, client.create_plan(&plan).await, json)
            }
        },
        Command::Checkins { action } => match action {
            CheckinAction::List => list(Resource::Checkins, client.get_checkins().await, json),
        },
    }
}

fn list(resource: Resource, result: Result<Value, RequestError>, json: bool) -> Result<String, CommandFailure> {
    let value = result.map_err(|e| CommandFailure::new(resource, Operation::List, e))?;
    Ok(if json { pretty(&value) } else { render_list(resource, &value) })
}

fn single(
    resource: Resource,
    operation: Operation,
    result: Result<Value, RequestError>,
    json: bool,
) -> Result<String, CommandFailure> {
    let value = result.map_err(|e| CommandFailure::new(resource, operation, e))?;
    Ok(if json { pretty(&value) } else { render_record(resource, &value) })
}

fn created(resource: Resource, result: Result<Value, RequestError>, json: bool) -> Result<String, CommandFailure> {
    let value = result.map_err(|e| CommandFailure::new(resource, Operation::Add, e))?;
    if json {
        return Ok(pretty(&value));
    }
    let mut title = resource.singular().to_string();
    if let Some(first) = title.get_mut(0..1) {
        first.make_ascii_uppercase();
    }
    Ok(format!("{} added successfully!\n{}", title, render_record(resource, &value)))
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// User-facing text for a failure. Creates show the server's reason when it
/// sent one, otherwise the resource's validation rules.
pub fn failure_message(resource: Resource, operation: Operation, error: &RequestError) -> String {
    match operation {
        Operation::List | Operation::Get => {
            let noun = match operation {
                Operation::Get => resource.singular(),
                _ => resource.plural(),
            };
            let mut message = format!("Failed to load {}.", noun);
            if error.kind == FailureKind::Transport {
                message.push_str(" Make sure the backend is running.");
            } else if operation == Operation::Get && error.status == Some(404) {
                message.push_str(" It does not exist.");
            }
            message
        }
        Operation::Add => {
            let mut message = format!("Failed to add {}. ", resource.singular());
            if error.has_structured_message() {
                message.push_str(&error.message);
            } else {
                message.push_str(validation_hint(resource));
            }
            message
        }
    }
}

fn validation_hint(resource: Resource) -> &'static str {
    match resource {
        Resource::Members => concat!(
            "Please check:\n",
            "• Email: valid format (e.g., user@example.com)\n",
            "• Phone: 10-15 digits (e.g., 050-1234567)\n",
            "• National ID: 9 digits (e.g., 123456789)\n",
            "• Password: 8+ chars with uppercase, lowercase, digit, and special character"
        ),
        Resource::Classes => {
            "Please check all fields: title (2-120 chars), instructor (2-120 chars), valid date/time, duration (15-300 min), capacity (1-300)."
        }
        Resource::Plans => {
            "Please check: name (2+ chars), type (3-30 chars), price (> 0), valid_days (> 0), max_entries (> 0 or empty)."
        }
        _ => "Please check the submitted fields.",
    }
}
