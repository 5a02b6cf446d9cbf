use chrono::NaiveDateTime;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::domain::model::{NewClass, NewMember, NewPlan};

#[derive(Debug, Clone, Parser)]
#[command(name = "fittrack")]
#[command(about = "Command-line client for the FitTrack gym backend")]
pub struct CliConfig {
    /// TOML config file (defaults to ./fittrack.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the backend base URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Print raw JSON instead of text cards
    #[arg(long, global = true)]
    pub json: bool,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Gym members
    Members {
        #[command(subcommand)]
        action: MemberAction,
    },
    /// Scheduled classes
    Classes {
        #[command(subcommand)]
        action: ClassAction,
    },
    /// Membership plans
    Plans {
        #[command(subcommand)]
        action: PlanAction,
    },
    /// Check-in records
    Checkins {
        #[command(subcommand)]
        action: CheckinAction,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum MemberAction {
    List,
    Get { id: String },
    Create(MemberArgs),
}

#[derive(Debug, Clone, Subcommand)]
pub enum ClassAction {
    List,
    Create(ClassArgs),
}

#[derive(Debug, Clone, Subcommand)]
pub enum PlanAction {
    List,
    Create(PlanArgs),
}

#[derive(Debug, Clone, Subcommand)]
pub enum CheckinAction {
    List,
}

#[derive(Debug, Clone, Args)]
pub struct MemberArgs {
    #[arg(long)]
    pub full_name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub phone: String,
    #[arg(long)]
    pub national_id: String,
    #[arg(long)]
    pub password: String,
}

#[derive(Debug, Clone, Args)]
pub struct ClassArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub instructor: String,
    /// Local start time, e.g. 2024-05-01T18:30 or 2024-05-01T18:30:00
    #[arg(long, value_parser = parse_start_time)]
    pub start_time: NaiveDateTime,
    #[arg(long, default_value = "60")]
    pub duration_minutes: u32,
    #[arg(long, default_value = "20")]
    pub capacity: u32,
}

#[derive(Debug, Clone, Args)]
pub struct PlanArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long = "type")]
    pub plan_type: String,
    #[arg(long)]
    pub price: f64,
    #[arg(long)]
    pub valid_days: u32,
    #[arg(long)]
    pub max_entries: Option<u32>,
}

fn parse_start_time(value: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M"))
        .map_err(|e| format!("expected YYYY-MM-DDTHH:MM[:SS]: {}", e))
}

impl From<MemberArgs> for NewMember {
    fn from(args: MemberArgs) -> Self {
        Self {
            full_name: args.full_name,
            email: args.email,
            phone: args.phone,
            national_id: args.national_id,
            password: args.password,
        }
    }
}

impl From<ClassArgs> for NewClass {
    fn from(args: ClassArgs) -> Self {
        Self {
            title: args.title,
            instructor: args.instructor,
            start_time: args.start_time,
            duration_minutes: args.duration_minutes,
            capacity: args.capacity,
        }
    }
}

impl From<PlanArgs> for NewPlan {
    fn from(args: PlanArgs) -> Self {
        Self {
            name: args.name,
            plan_type: args.plan_type,
            price: args.price,
            valid_days: args.valid_days,
            max_entries: args.max_entries,
        }
    }
}
