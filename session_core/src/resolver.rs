use tracing::debug;

use crate::picking::{pick_by_number, pick_laps};
use crate::session::SessionHandle;
use crate::types::{text, RawLapRecord};

/// Laps for a caller-supplied driver identifier.
///
/// Tried in order, stopping at the first strategy that applies:
/// 1. direct match on the lap table (abbreviation or number column);
/// 2. walk the roster, find the driver whose abbreviation equals
///    `identifier`, and match laps on that driver's number. Some session types
///    key their lap table by number only.
///
/// Roster entries that fail to load are skipped. A miss on both tiers gives an
/// empty list.
pub fn lookup_laps<'a, S>(session: &S, laps: &'a [RawLapRecord], identifier: &str) -> Vec<&'a RawLapRecord>
where
    S: SessionHandle + ?Sized,
{
    let direct = pick_laps(laps, identifier);
    if !direct.is_empty() {
        return direct;
    }

    let Ok(ids) = session.driver_ids() else {
        return Vec::new();
    };
    for id in ids {
        let Ok(info) = session.driver_info(id) else { continue };
        if text(&info.abbreviation) != Some(identifier) {
            continue;
        }
        let number = text(&info.driver_number).unwrap_or(id.as_str());
        debug!("driver {} resolved through roster to number {}", identifier, number);
        return pick_by_number(laps, number);
    }
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionSnapshot;
    use serde_json::json;

    fn session() -> SessionSnapshot {
        serde_json::from_value(json!({
            "drivers": ["44", "16", "1"],
            "driver_info": {
                "16": { "Abbreviation": "LEC", "DriverNumber": "16" },
                "1": { "Abbreviation": "VER", "DriverNumber": "1" }
            },
            "laps": [
                { "DriverNumber": "1", "LapNumber": 1.0 },
                { "DriverNumber": "16", "LapNumber": 1.0 },
                { "DriverNumber": "1", "LapNumber": 2.0 },
                { "Driver": "NOR", "DriverNumber": "4", "LapNumber": 1.0 }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_direct_match_wins() {
        let s = session();
        let laps = s.laps().unwrap();
        let out = lookup_laps(&s, laps, "NOR");
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn test_fallback_through_roster_skips_missing_entries() {
        // "44" has no info record; the walk continues to the next id.
        let s = session();
        let laps = s.laps().unwrap();
        let out = lookup_laps(&s, laps, "VER");
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|l| l.driver_number.as_deref() == Some("1")));
    }

    #[test]
    fn test_unknown_driver_is_empty() {
        let s = session();
        assert!(lookup_laps(&s, s.laps().unwrap(), "ALO").is_empty());
    }
}
