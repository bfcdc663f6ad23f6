use tracing::warn;

use crate::best_lap::resolve_best_lap;
use crate::error::Result;
use crate::session::SessionHandle;
use crate::timefmt::format_optional;
use crate::types::{as_int, finite, text, NormalizedResult, RawResultRecord};

/// Classification for the session, sorted by position.
///
/// A row without a position takes `row_index + 1`, which assumes the provider
/// lists rows in classification order. A row without a fastest lap asks
/// [`resolve_best_lap`]. The final stable sort keeps the list totally ordered
/// even if explicit and fallback positions collide.
///
/// Returns an empty list when the results table cannot be read.
pub fn normalize_results<S>(session: &S) -> Vec<NormalizedResult>
where
    S: SessionHandle + ?Sized,
{
    match collect_results(session) {
        Ok(results) => results,
        Err(e) => {
            warn!("results normalization failed: {}", e);
            Vec::new()
        }
    }
}

fn collect_results<S>(session: &S) -> Result<Vec<NormalizedResult>>
where
    S: SessionHandle + ?Sized,
{
    let rows = session.results()?;
    let mut out: Vec<NormalizedResult> = rows
        .iter()
        .enumerate()
        .map(|(idx, row)| normalize_row(session, idx, row))
        .collect();
    out.sort_by_key(|r| r.position);
    Ok(out)
}

fn normalize_row<S>(session: &S, idx: usize, row: &RawResultRecord) -> NormalizedResult
where
    S: SessionHandle + ?Sized,
{
    let abbreviation = text(&row.abbreviation).unwrap_or_default().to_string();
    let driver_number = text(&row.driver_number).and_then(|n| n.trim().parse::<i64>().ok());

    let best_lap_time = format_optional(row.fastest_lap_time)
        .or_else(|| resolve_best_lap(session, &abbreviation, driver_number));

    NormalizedResult {
        position: as_int(row.position).unwrap_or(idx as i64 + 1),
        abbreviation,
        driver_number,
        name: text(&row.full_name).unwrap_or_default().to_string(),
        team: text(&row.team_name).unwrap_or_default().to_string(),
        q1: format_optional(row.q1),
        q2: format_optional(row.q2),
        q3: format_optional(row.q3),
        best_lap_time,
        points: finite(row.points).unwrap_or(0.0),
        status: row.status.clone(),
    }
}
