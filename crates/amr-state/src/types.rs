//! View-state entities and the partial patch shapes accepted on the wire.

#![allow(missing_docs)]

use serde::Deserialize;

/// Fleet-wide summary KPIs shown on the home tab.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryMetrics {
    pub uptime_rate: f64,
    pub active_robots: u32,
    pub total_robots: u32,
    pub active_jobs: u32,
    pub avg_job_minutes: f64,
    pub alarms: AlarmCounts,
    pub latency_ms: u32,
    pub energy_pct: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct AlarmCounts {
    pub warn: u32,
    pub crit: u32,
}

/// Partial summary update; absent fields keep their prior value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SummaryPatch {
    pub uptime_rate: Option<f64>,
    pub active_robots: Option<u32>,
    pub total_robots: Option<u32>,
    pub active_jobs: Option<u32>,
    pub avg_job_minutes: Option<f64>,
    pub alarms: Option<AlarmPatch>,
    pub latency_ms: Option<u32>,
    pub energy_pct: Option<u32>,
}

/// Alarm counts are merged one level deep, not replaced wholesale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AlarmPatch {
    pub warn: Option<u32>,
    pub crit: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Info,
    Warn,
    Crit,
}

/// One entry of the recent-events feed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EventItem {
    pub t: String,
    #[serde(rename = "type")]
    pub severity: Severity,
    pub msg: String,
    pub robot: String,
    #[serde(default)]
    pub status: Option<String>,
}

/// Per-robot status row, keyed by robot id.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RobotStatusItem {
    pub id: String,
    pub state: String,
    pub bat: String,
    pub job: String,
    pub t: String,
}

/// One completed-job row.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct JobHistoryItem {
    pub t: String,
    pub job: String,
    pub robot: String,
    pub d: String,
    pub r: String,
}

/// Battery inventory row, keyed by robot id.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BatteryItem {
    pub id: String,
    pub soc: String,
    pub temp: String,
    pub cycle: String,
    pub state: String,
}

/// Localization snapshot of the selected robot.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MapStatus {
    pub x: f64,
    pub y: f64,
    pub heading: f64,
    pub speed: f64,
    pub mission: String,
    pub state: String,
}

/// Partial map update; absent fields keep their prior value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MapPatch {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub heading: Option<f64>,
    pub speed: Option<f64>,
    pub mission: Option<String>,
    pub state: Option<String>,
}

/// Round-trip latency measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct LatencyPayload {
    pub ms: u32,
}

/// Rows upserted into bounded lists by unique id.
pub trait Keyed {
    fn key(&self) -> &str;
}

impl Keyed for RobotStatusItem {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for BatteryItem {
    fn key(&self) -> &str {
        &self.id
    }
}
