use chrono::Utc;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Debug, PartialEq, Deserialize)]
pub struct Greeting {
    pub message: String,
    pub timestamp: String,
    pub personalized: bool,
}

impl Greeting {
    pub fn for_name(name: &str) -> Self {
        Self {
            message: format!("Hello {name}!"),
            timestamp: Utc::now().to_rfc3339(),
            personalized: name != "World",
        }
    }
}

#[derive(Serialize, Debug, PartialEq, Deserialize)]
pub struct Echo {
    pub original: String,
    pub reversed: String,
    pub uppercase: String,
    pub lowercase: String,
    pub length: usize,
    pub timestamp: String,
}

impl Echo {
    pub fn of(message: &str) -> Self {
        Self {
            original: message.to_string(),
            reversed: message.chars().rev().collect(),
            uppercase: message.to_uppercase(),
            lowercase: message.to_lowercase(),
            length: message.chars().count(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

#[derive(Serialize, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RandomValues {
    pub random_int: u32,
    pub random_double: f64,
    pub random_boolean: bool,
    pub timestamp: String,
}

#[derive(Serialize, Debug, PartialEq, Deserialize)]
pub struct MemoryUsage {
    pub total: String,
    pub free: String,
    pub used: String,
}

/// Runtime status served by `/status`.
#[derive(Serialize, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusReport {
    pub status: String,
    pub timestamp: String,
    pub uptime_ms: i64,
    pub memory: MemoryUsage,
    pub processors: usize,
}
