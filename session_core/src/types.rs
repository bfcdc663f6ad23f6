use serde::{Deserialize, Serialize};

// ---------- Raw provider rows ----------
//
// Column names follow the provider's tables. Durations are seconds. Any float
// that is not finite counts as absent.

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RawLapRecord {
    pub driver: Option<String>,          // abbreviation, e.g. "VER"
    pub driver_number: Option<String>,   // some session types only carry this
    pub lap_number: Option<f64>,
    pub lap_time: Option<f64>,
    pub sector1_time: Option<f64>,
    pub sector2_time: Option<f64>,
    pub sector3_time: Option<f64>,
    pub compound: Option<String>,        // "SOFT", "MEDIUM", "HARD", "INTERMEDIATE", "WET"
    pub tyre_life: Option<f64>,          // age in laps
    pub is_personal_best: Option<bool>,
    pub is_fastest: Option<bool>,
    pub deleted: Option<bool>,           // invalidated by race control
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RawResultRecord {
    pub position: Option<f64>,
    pub abbreviation: Option<String>,
    pub driver_number: Option<String>,
    pub full_name: Option<String>,
    pub team_name: Option<String>,
    pub q1: Option<f64>,
    pub q2: Option<f64>,
    pub q3: Option<f64>,
    pub fastest_lap_time: Option<f64>,
    pub points: Option<f64>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DriverInfo {
    pub abbreviation: Option<String>,
    pub driver_number: Option<String>,
    pub full_name: Option<String>,
    pub team_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct EventInfo {
    pub year: Option<i32>,
    pub event_name: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct RawCorner {
    #[serde(rename = "X")]
    pub x: Option<f64>,
    #[serde(rename = "Y")]
    pub y: Option<f64>,
    #[serde(rename = "Number")]
    pub number: Option<f64>,
    #[serde(rename = "Letter")]
    pub letter: Option<String>,
    #[serde(rename = "Angle")]
    pub angle: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct CircuitMetadata {
    pub rotation: Option<f64>, // degrees
    pub corners: Vec<RawCorner>,
}

// ---------- Normalized replies ----------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedLap {
    pub driver: String,
    pub lap_number: i64,
    pub lap_time: Option<String>,
    pub sector_1_time: Option<String>,
    pub sector_2_time: Option<String>,
    pub sector_3_time: Option<String>,
    pub compound: Option<String>,
    pub tyre_life: Option<i64>,
    pub is_personal_best: bool,
    pub is_fastest: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedResult {
    pub position: i64,
    pub abbreviation: String,
    pub driver_number: Option<i64>,
    pub name: String,
    pub team: String,
    pub q1: Option<String>,
    pub q2: Option<String>,
    pub q3: Option<String>,
    pub best_lap_time: Option<String>,
    pub points: f64,
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DriverEntry {
    pub abbreviation: String,
    pub number: i64,
    pub name: String,
    pub team: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionInfo {
    pub year: i32,
    pub event_name: String,
    pub location: String,
    pub session_name: String,
    pub session_date: Option<String>,
    pub session_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Corner {
    pub x: f64,
    pub y: f64,
    pub number: i64,
    pub letter: String,
    pub angle: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CircuitInfo {
    pub rotation: f64,
    pub location: String,
    pub track: Vec<[f64; 2]>, // pairs keep the payload compact
    pub corners: Vec<Corner>,
}

/// Circuit reply: either the reconstructed map or `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CircuitReply {
    Info(CircuitInfo),
    Error { error: String },
}

// ---------- NaN-means-absent helpers ----------

pub(crate) fn finite(v: Option<f64>) -> Option<f64> {
    v.filter(|x| x.is_finite())
}

/// Whole-number view of a provider float; `None` when absent or not finite.
pub(crate) fn as_int(v: Option<f64>) -> Option<i64> {
    finite(v).map(|x| x.trunc() as i64)
}

/// Empty strings count as absent, like blank provider cells.
pub(crate) fn text(v: &Option<String>) -> Option<&str> {
    v.as_deref().filter(|s| !s.is_empty())
}
