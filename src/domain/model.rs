use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Backend entity types addressable by a configured path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Members,
    Classes,
    Plans,
    Checkins,
    Subscriptions,
    Payments,
}

impl Resource {
    /// Singular noun used in user-facing messages.
    pub fn singular(&self) -> &'static str {
        match self {
            Resource::Members => "member",
            Resource::Classes => "class",
            Resource::Plans => "plan",
            Resource::Checkins => "check-in",
            Resource::Subscriptions => "subscription",
            Resource::Payments => "payment",
        }
    }

    pub fn plural(&self) -> &'static str {
        match self {
            Resource::Members => "members",
            Resource::Classes => "classes",
            Resource::Plans => "plans",
            Resource::Checkins => "check-ins",
            Resource::Subscriptions => "subscriptions",
            Resource::Payments => "payments",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.plural())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewMember {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub national_id: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewClass {
    pub title: String,
    pub instructor: String,
    pub start_time: NaiveDateTime,
    #[serde(default = "default_duration_minutes")]
    pub duration_minutes: u32,
    #[serde(default = "default_capacity")]
    pub capacity: u32,
}

fn default_duration_minutes() -> u32 {
    60
}

fn default_capacity() -> u32 {
    20
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewPlan {
    pub name: String,
    #[serde(rename = "type")]
    pub plan_type: String,
    pub price: f64,
    pub valid_days: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_entries: Option<u32>,
}
