//! Structured log record accepted by the remote log collector.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error returned when a stack, level or package name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid log {field}: '{value}'")]
pub struct InvalidLogField {
    pub field: &'static str,
    pub value: String,
}

/// Which half of the application emitted the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stack {
    Backend,
    Frontend,
}

impl Stack {
    pub const ALL: &'static [Stack] = &[Stack::Backend, Stack::Frontend];

    pub fn as_str(&self) -> &'static str {
        match self {
            Stack::Backend => "backend",
            Stack::Frontend => "frontend",
        }
    }
}

/// Severity of the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

impl Level {
    pub const ALL: &'static [Level] = &[
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
        Level::Fatal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::Fatal => "fatal",
        }
    }
}

/// Component of the application that emitted the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Package {
    Auth,
    Config,
    Middleware,
    Utils,
    Cache,
    Controller,
    CronJob,
    Db,
}

impl Package {
    pub const ALL: &'static [Package] = &[
        Package::Auth,
        Package::Config,
        Package::Middleware,
        Package::Utils,
        Package::Cache,
        Package::Controller,
        Package::CronJob,
        Package::Db,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Package::Auth => "auth",
            Package::Config => "config",
            Package::Middleware => "middleware",
            Package::Utils => "utils",
            Package::Cache => "cache",
            Package::Controller => "controller",
            Package::CronJob => "cron_job",
            Package::Db => "db",
        }
    }
}

/// Case-insensitive lookup of `value` among `candidates` by wire name.
fn parse_field<T: Copy>(
    candidates: &[T],
    name: fn(&T) -> &'static str,
    field: &'static str,
    value: &str,
) -> Result<T, InvalidLogField> {
    let lowered = value.trim().to_ascii_lowercase();
    candidates
        .iter()
        .copied()
        .find(|candidate| name(candidate) == lowered)
        .ok_or_else(|| InvalidLogField {
            field,
            value: value.to_string(),
        })
}

impl FromStr for Stack {
    type Err = InvalidLogField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_field(Self::ALL, Self::as_str, "stack", s)
    }
}

impl FromStr for Level {
    type Err = InvalidLogField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_field(Self::ALL, Self::as_str, "level", s)
    }
}

impl FromStr for Package {
    type Err = InvalidLogField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_field(Self::ALL, Self::as_str, "package", s)
    }
}

impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single record as POSTed to the collector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: String,
    pub stack: Stack,
    pub level: Level,
    pub package: Package,
    pub message: String,
}

impl LogEntry {
    pub fn new(
        timestamp: DateTime<Utc>,
        stack: Stack,
        level: Level,
        package: Package,
        message: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            stack,
            level,
            package,
            message: message.into(),
        }
    }
}
