use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::geometry::{rotate, rotate_point};
use crate::picking::pick_fastest;
use crate::session::SessionHandle;
use crate::types::{as_int, finite, text, CircuitInfo, CircuitReply, Corner, RawCorner};

/// Rotated track outline and corner markers for the session.
///
/// The outline is the position trace of the session's fastest lap, or of the
/// first lap when nothing qualifies as fastest. A session without laps still
/// gets its rotation and location, with no track and no corners. Failures come
/// back as `{"error": ...}`.
pub fn get_circuit_info<S>(session: &S) -> CircuitReply
where
    S: SessionHandle + ?Sized,
{
    match reconstruct(session) {
        Ok(info) => CircuitReply::Info(info),
        Err(e) => {
            warn!("circuit reconstruction failed: {}", e);
            CircuitReply::Error { error: e.to_string() }
        }
    }
}

fn reconstruct<S>(session: &S) -> Result<CircuitInfo>
where
    S: SessionHandle + ?Sized,
{
    let meta = session.circuit_info()?;
    let rotation = finite(meta.rotation).unwrap_or(0.0);
    let location = text(&session.event()?.location).unwrap_or_default().to_string();

    let laps = session.laps()?;
    if laps.is_empty() {
        debug!("session has no laps, circuit map left empty");
        return Ok(CircuitInfo { rotation, location, track: Vec::new(), corners: Vec::new() });
    }
    let reference = pick_fastest(laps).or_else(|| laps.first());

    let track = match reference {
        Some(lap) => {
            debug!(
                "reference lap: driver={:?} lap={:?}",
                lap.driver.as_deref().or(lap.driver_number.as_deref()),
                as_int(lap.lap_number)
            );
            rotate(&session.position_samples(lap)?, rotation)
        }
        None => Vec::new(),
    };

    let corners = meta
        .corners
        .iter()
        .map(|c| corner(c, rotation))
        .collect::<Result<Vec<_>>>()?;

    Ok(CircuitInfo { rotation, location, track, corners })
}

fn corner(raw: &RawCorner, rotation: f64) -> Result<Corner> {
    let x = raw.x.ok_or(Error::MissingField("X"))?;
    let y = raw.y.ok_or(Error::MissingField("Y"))?;
    let [x, y] = rotate_point([x, y], rotation);
    Ok(Corner {
        x,
        y,
        number: as_int(raw.number).unwrap_or(0),
        letter: raw.letter.clone().unwrap_or_default(),
        angle: finite(raw.angle).unwrap_or(0.0),
    })
}
