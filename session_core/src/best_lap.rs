use tracing::{debug, warn};

use crate::error::Result;
use crate::picking::{pick_fastest, pick_fastest_by_time, pick_laps};
use crate::resolver::lookup_laps;
use crate::session::SessionHandle;
use crate::timefmt::format_optional;
use crate::types::RawLapRecord;

/// Best valid lap time for one driver, formatted; `None` when there is none.
///
/// The order of the fallbacks is part of the contract:
/// 1. candidate laps by driver number, else by abbreviation;
/// 2. drop laps deleted by race control (no flag means kept);
/// 3. the personal-best flagged lap with the lowest time, else the lowest time
///    among all remaining laps (race sessions often flag nothing).
///
/// Never fails: a session that cannot be read also gives `None`.
pub fn resolve_best_lap<S>(session: &S, abbreviation: &str, driver_number: Option<i64>) -> Option<String>
where
    S: SessionHandle + ?Sized,
{
    match best_lap(session, abbreviation, driver_number) {
        Ok(t) => t,
        Err(e) => {
            warn!("best lap lookup failed for {}: {}", abbreviation, e);
            None
        }
    }
}

fn best_lap<S>(session: &S, abbreviation: &str, driver_number: Option<i64>) -> Result<Option<String>>
where
    S: SessionHandle + ?Sized,
{
    let laps = session.laps()?;

    let mut candidates = match driver_number {
        Some(n) => pick_laps(laps, &n.to_string()),
        None => Vec::new(),
    };
    if candidates.is_empty() && !abbreviation.is_empty() {
        candidates = lookup_laps(session, laps, abbreviation);
    }
    if candidates.is_empty() {
        debug!("no laps for {} ({:?})", abbreviation, driver_number);
        return Ok(None);
    }

    let valid: Vec<&RawLapRecord> = candidates
        .into_iter()
        .filter(|lap| !lap.deleted.unwrap_or(false))
        .collect();
    if valid.is_empty() {
        debug!("every lap of {} was deleted", abbreviation);
        return Ok(None);
    }

    let chosen = pick_fastest(valid.iter().copied()).or_else(|| {
        debug!("no personal best flagged for {}, using quickest lap", abbreviation);
        pick_fastest_by_time(valid.iter().copied())
    });
    Ok(chosen.and_then(|lap| format_optional(lap.lap_time)))
}
