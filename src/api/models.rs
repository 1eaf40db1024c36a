use serde::Serialize;

use crate::config::{Language, TimeZoneSetting};

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_ms: u64,
}

#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    pub language: Language,
    pub timezone: TimeZoneSetting,
    pub timestamp: String,
}
