//! The session handle the core reads from.
//!
//! Loading is the caller's job. The core only reads, so one handle can be
//! shared across threads behind an `Arc`.

use serde::Deserialize;
use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::types::{
    as_int, CircuitMetadata, DriverInfo, EventInfo, RawLapRecord, RawResultRecord,
};

pub trait SessionHandle: Send + Sync {
    fn event(&self) -> Result<&EventInfo>;
    fn session_name(&self) -> Result<&str>;
    fn session_date(&self) -> Option<&str>;
    fn session_type(&self) -> Result<&str>;

    /// Driver numbers as strings, in the provider's order.
    fn driver_ids(&self) -> Result<&[String]>;
    fn driver_info(&self, id: &str) -> Result<&DriverInfo>;

    fn laps(&self) -> Result<&[RawLapRecord]>;
    fn results(&self) -> Result<&[RawResultRecord]>;
    fn circuit_info(&self) -> Result<&CircuitMetadata>;

    /// `[x, y]` samples recorded over one lap. Empty when none were captured.
    fn position_samples(&self, lap: &RawLapRecord) -> Result<Vec<[f64; 2]>>;
}

/// Position columns captured for one driver's lap.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PositionTrace {
    pub driver_number: String,
    pub lap_number: i64,
    #[serde(rename = "X")]
    pub x: Vec<f64>,
    #[serde(rename = "Y")]
    pub y: Vec<f64>,
}

/// A fully loaded session held in memory, typically deserialized from one
/// JSON document per `(year, event, session_type)`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SessionSnapshot {
    pub event: Option<EventInfo>,
    pub session_name: Option<String>,
    pub session_date: Option<String>,
    pub session_type: Option<String>,
    pub drivers: Option<Vec<String>>,
    pub driver_info: HashMap<String, DriverInfo>,
    pub laps: Option<Vec<RawLapRecord>>,
    pub results: Option<Vec<RawResultRecord>>,
    pub circuit: Option<CircuitMetadata>,
    pub positions: Vec<PositionTrace>,
}

impl SessionSnapshot {
    pub fn from_json(data: &str) -> serde_json::Result<Self> {
        serde_json::from_str(data)
    }

    /// Driver number for a lap row, resolving through the roster when the row
    /// only carries the abbreviation.
    fn lap_driver_number(&self, lap: &RawLapRecord) -> Option<String> {
        if let Some(n) = lap.driver_number.as_deref().filter(|s| !s.is_empty()) {
            return Some(n.to_string());
        }
        let abbr = lap.driver.as_deref()?;
        self.driver_info
            .iter()
            .find(|(_, info)| info.abbreviation.as_deref() == Some(abbr))
            .map(|(id, _)| id.clone())
    }
}

impl SessionHandle for SessionSnapshot {
    fn event(&self) -> Result<&EventInfo> {
        self.event.as_ref().ok_or(Error::NotLoaded("event"))
    }

    fn session_name(&self) -> Result<&str> {
        self.session_name.as_deref().ok_or(Error::MissingField("session_name"))
    }

    fn session_date(&self) -> Option<&str> {
        self.session_date.as_deref().filter(|s| !s.is_empty())
    }

    fn session_type(&self) -> Result<&str> {
        self.session_type.as_deref().ok_or(Error::MissingField("session_type"))
    }

    fn driver_ids(&self) -> Result<&[String]> {
        self.drivers.as_deref().ok_or(Error::NotLoaded("drivers"))
    }

    fn driver_info(&self, id: &str) -> Result<&DriverInfo> {
        self.driver_info
            .get(id)
            .ok_or_else(|| Error::DriverNotFound(id.to_string()))
    }

    fn laps(&self) -> Result<&[RawLapRecord]> {
        self.laps.as_deref().ok_or(Error::NotLoaded("laps"))
    }

    fn results(&self) -> Result<&[RawResultRecord]> {
        self.results.as_deref().ok_or(Error::NotLoaded("results"))
    }

    fn circuit_info(&self) -> Result<&CircuitMetadata> {
        self.circuit.as_ref().ok_or(Error::NotLoaded("circuit"))
    }

    fn position_samples(&self, lap: &RawLapRecord) -> Result<Vec<[f64; 2]>> {
        let (Some(number), Some(lap_number)) = (self.lap_driver_number(lap), as_int(lap.lap_number))
        else {
            return Ok(Vec::new());
        };
        let Some(trace) = self
            .positions
            .iter()
            .find(|t| t.driver_number == number && t.lap_number == lap_number)
        else {
            return Ok(Vec::new());
        };
        if trace.x.len() != trace.y.len() {
            return Err(Error::MalformedTrace {
                driver: number,
                lap: lap_number,
                x_len: trace.x.len(),
                y_len: trace.y.len(),
            });
        }
        Ok(trace.x.iter().zip(&trace.y).map(|(&x, &y)| [x, y]).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn snapshot() -> SessionSnapshot {
        serde_json::from_value(json!({
            "drivers": ["1"],
            "driver_info": { "1": { "Abbreviation": "VER", "DriverNumber": "1" } },
            "laps": [ { "Driver": "VER", "LapNumber": 3.0 } ],
            "positions": [
                { "DriverNumber": "1", "LapNumber": 3, "X": [1.0, 2.0], "Y": [5.0, 6.0] },
                { "DriverNumber": "1", "LapNumber": 4, "X": [1.0], "Y": [] }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_missing_sections_report_not_loaded() {
        let s = snapshot();
        assert!(matches!(s.results(), Err(Error::NotLoaded("results"))));
        assert!(matches!(s.circuit_info(), Err(Error::NotLoaded("circuit"))));
        assert!(matches!(s.driver_info("44"), Err(Error::DriverNotFound(_))));
    }

    #[test]
    fn test_samples_resolve_through_roster() {
        let s = snapshot();
        let lap = s.laps().unwrap()[0].clone();
        assert_eq!(s.position_samples(&lap).unwrap(), vec![[1.0, 5.0], [2.0, 6.0]]);

        let unknown = RawLapRecord { driver: Some("HAM".into()), lap_number: Some(3.0), ..Default::default() };
        assert!(s.position_samples(&unknown).unwrap().is_empty());
    }

    #[test]
    fn test_mismatched_trace_is_an_error() {
        let s = snapshot();
        let lap = RawLapRecord { driver_number: Some("1".into()), lap_number: Some(4.0), ..Default::default() };
        assert!(matches!(s.position_samples(&lap), Err(Error::MalformedTrace { x_len: 1, y_len: 0, .. })));
    }
}
