use crate::domain::model::Resource;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;

/// Only the most recent check-ins are shown.
pub const CHECKIN_DISPLAY_LIMIT: usize = 20;

/// Render a list response as text cards, one blank line between cards.
pub fn render_list(resource: Resource, value: &Value) -> String {
    let items = records(resource, value);
    if items.is_empty() {
        return empty_message(resource).to_string();
    }

    let limit = match resource {
        Resource::Checkins => CHECKIN_DISPLAY_LIMIT,
        _ => usize::MAX,
    };

    items
        .into_iter()
        .take(limit)
        .map(|record| card(resource, record))
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn render_record(resource: Resource, value: &Value) -> String {
    card(resource, value)
}

/// Lists arrive either as a bare array or wrapped as `{"<resource>": [...]}`.
fn records(resource: Resource, value: &Value) -> Vec<&Value> {
    match value {
        Value::Array(items) => items.iter().collect(),
        Value::Object(obj) => match obj.get(wrapper_key(resource)) {
            Some(Value::Array(items)) => items.iter().collect(),
            _ => vec![value],
        },
        Value::Null => Vec::new(),
        other => vec![other],
    }
}

fn wrapper_key(resource: Resource) -> &'static str {
    match resource {
        Resource::Checkins => "checkins",
        other => other.plural(),
    }
}

fn empty_message(resource: Resource) -> &'static str {
    match resource {
        Resource::Members => "No members found. Add your first member!",
        Resource::Classes => "No classes scheduled yet.",
        Resource::Plans => "No plans available.",
        Resource::Checkins => "No check-ins recorded yet.",
        _ => "Nothing found.",
    }
}

fn card(resource: Resource, record: &Value) -> String {
    match resource {
        Resource::Members => format!(
            "{} [{}]\n  Email: {}\n  Phone: {}\n  National ID: {}\n  Member since: {}",
            field(record, "full_name"),
            field(record, "status"),
            field(record, "email"),
            field(record, "phone"),
            field(record, "national_id"),
            date_field(record, "created_at"),
        ),
        Resource::Classes => {
            let capacity = record.get("capacity").and_then(Value::as_i64).unwrap_or(0);
            let stats = record.get("stats");
            let enrolled = stats
                .and_then(|s| s.get("active_registrations"))
                .and_then(Value::as_i64)
                .unwrap_or(0);
            let available = stats
                .and_then(|s| s.get("available_slots"))
                .and_then(Value::as_i64)
                .unwrap_or(capacity);
            format!(
                "{}\n  Instructor: {}\n  Starts: {}\n  Duration: {} minutes\n  Capacity: {}/{} enrolled\n  Available: {} spots",
                field(record, "title"),
                field(record, "instructor"),
                date_time_field(record, "start_time"),
                field(record, "duration_minutes"),
                enrolled,
                capacity,
                available,
            )
        }
        Resource::Plans => {
            let price = record
                .get("price")
                .and_then(Value::as_f64)
                .map(|p| format!("${:.2}", p))
                .unwrap_or_else(|| "-".to_string());
            let max_entries = match record.get("max_entries").and_then(Value::as_i64) {
                Some(n) if n > 0 => format!("{} visits", n),
                _ => "Unlimited".to_string(),
            };
            format!(
                "{}\n  Type: {}\n  Price: {}\n  Valid for: {} days\n  Max entries: {}",
                field(record, "name"),
                field(record, "type"),
                price,
                field(record, "valid_days"),
                max_entries,
            )
        }
        Resource::Checkins => format!(
            "Member ID: {}  {}  [Checked In]",
            field(record, "member_id"),
            date_time_field(record, "checkin_time"),
        ),
        _ => record.to_string(),
    }
}

/// ISO timestamps from the backend, with or without offset or fraction.
fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// `Jan 2, 2024`; unparseable values are shown as sent.
fn date_field(record: &Value, key: &str) -> String {
    let raw = field(record, key);
    parse_timestamp(&raw)
        .map(|t| t.format("%b %-d, %Y").to_string())
        .unwrap_or(raw)
}

/// `Jan 2, 2024, 08:00 AM`
fn date_time_field(record: &Value, key: &str) -> String {
    let raw = field(record, key);
    parse_timestamp(&raw)
        .map(|t| t.format("%b %-d, %Y, %I:%M %p").to_string())
        .unwrap_or(raw)
}

fn field(record: &Value, key: &str) -> String {
    match record.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => "-".to_string(),
        Some(other) => other.to_string(),
    }
}
