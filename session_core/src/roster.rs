use tracing::warn;

use crate::error::{Error, Result};
use crate::session::SessionHandle;
use crate::types::{text, DriverEntry, SessionInfo};

/// Drivers in roster order. One bad entry empties the whole list.
pub fn get_drivers<S>(session: &S) -> Vec<DriverEntry>
where
    S: SessionHandle + ?Sized,
{
    match collect_drivers(session) {
        Ok(drivers) => drivers,
        Err(e) => {
            warn!("driver listing failed: {}", e);
            Vec::new()
        }
    }
}

fn collect_drivers<S>(session: &S) -> Result<Vec<DriverEntry>>
where
    S: SessionHandle + ?Sized,
{
    session
        .driver_ids()?
        .iter()
        .map(|id| -> Result<DriverEntry> {
            let info = session.driver_info(id)?;
            let raw_number = text(&info.driver_number).ok_or(Error::MissingField("DriverNumber"))?;
            let number = raw_number.trim().parse::<i64>().map_err(|_| Error::InvalidValue {
                field: "DriverNumber",
                value: raw_number.to_string(),
            })?;
            Ok(DriverEntry {
                abbreviation: required(&info.abbreviation, "Abbreviation")?,
                number,
                name: required(&info.full_name, "FullName")?,
                team: required(&info.team_name, "TeamName")?,
            })
        })
        .collect()
}

/// Headline data for the session; `None` renders as an empty mapping.
pub fn get_session_info<S>(session: &S) -> Option<SessionInfo>
where
    S: SessionHandle + ?Sized,
{
    match collect_info(session) {
        Ok(info) => Some(info),
        Err(e) => {
            warn!("session info unavailable: {}", e);
            None
        }
    }
}

fn collect_info<S>(session: &S) -> Result<SessionInfo>
where
    S: SessionHandle + ?Sized,
{
    let event = session.event()?;
    Ok(SessionInfo {
        year: event.year.ok_or(Error::MissingField("Year"))?,
        event_name: required(&event.event_name, "EventName")?,
        location: required(&event.location, "Location")?,
        session_name: session.session_name()?.to_string(),
        session_date: session.session_date().map(str::to_string),
        session_type: session.session_type()?.to_string(),
    })
}

fn required(v: &Option<String>, field: &'static str) -> Result<String> {
    v.clone().ok_or(Error::MissingField(field))
}
