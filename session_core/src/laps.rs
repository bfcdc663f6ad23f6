use tracing::warn;

use crate::error::Result;
use crate::resolver::lookup_laps;
use crate::session::SessionHandle;
use crate::timefmt::format_optional;
use crate::types::{as_int, text, NormalizedLap, RawLapRecord};

/// Lap table for the session, optionally restricted to one driver.
///
/// Rows keep the table's order. Absent or NaN values become `None`, the two
/// flags default to `false` and a missing lap number to `0`. A row without an
/// abbreviation reports the requested driver, which covers tables keyed by
/// number only.
///
/// Returns an empty list when the lap table cannot be read; empty means "no data".
pub fn normalize_laps<S>(session: &S, driver_filter: Option<&str>) -> Vec<NormalizedLap>
where
    S: SessionHandle + ?Sized,
{
    match collect_laps(session, driver_filter.filter(|d| !d.is_empty())) {
        Ok(laps) => laps,
        Err(e) => {
            warn!("lap normalization failed (driver={:?}): {}", driver_filter, e);
            Vec::new()
        }
    }
}

fn collect_laps<S>(session: &S, driver_filter: Option<&str>) -> Result<Vec<NormalizedLap>>
where
    S: SessionHandle + ?Sized,
{
    let all = session.laps()?;
    let rows: Vec<&RawLapRecord> = match driver_filter {
        Some(driver) => lookup_laps(session, all, driver),
        None => all.iter().collect(),
    };
    Ok(rows.into_iter().map(|lap| normalize_lap(lap, driver_filter)).collect())
}

pub(crate) fn normalize_lap(lap: &RawLapRecord, driver_filter: Option<&str>) -> NormalizedLap {
    let driver = match (text(&lap.driver), driver_filter) {
        (Some(raw), _) => raw.to_string(),
        (None, Some(wanted)) => wanted.to_string(),
        (None, None) => String::new(),
    };

    NormalizedLap {
        driver,
        lap_number: as_int(lap.lap_number).unwrap_or(0),
        lap_time: format_optional(lap.lap_time),
        sector_1_time: format_optional(lap.sector1_time),
        sector_2_time: format_optional(lap.sector2_time),
        sector_3_time: format_optional(lap.sector3_time),
        compound: lap.compound.clone(),
        tyre_life: as_int(lap.tyre_life),
        is_personal_best: lap.is_personal_best.unwrap_or(false),
        is_fastest: lap.is_fastest.unwrap_or(false),
    }
}
