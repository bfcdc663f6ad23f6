//! Normalization of loaded timing sessions into the shapes the front-end reads.
//!
//! Every public operation is total: it reads a [`SessionHandle`] and always
//! returns a value. Internal failures are logged and collapse into that
//! operation's empty reply (empty list, `None`, or a circuit `error`).

mod best_lap;
mod circuit;
mod error;
mod laps;
mod picking;
mod resolver;
mod results;
mod roster;
mod session;
mod timefmt;
mod types;

pub mod geometry;

pub use best_lap::resolve_best_lap;
pub use circuit::get_circuit_info;
pub use error::{Error, Result};
pub use laps::normalize_laps;
pub use resolver::lookup_laps;
pub use results::normalize_results;
pub use roster::{get_drivers, get_session_info};
pub use session::{PositionTrace, SessionHandle, SessionSnapshot};
pub use timefmt::{format_optional, format_timedelta};
pub use types::{
    CircuitInfo, CircuitMetadata, CircuitReply, Corner, DriverEntry, DriverInfo, EventInfo,
    NormalizedLap, NormalizedResult, RawCorner, RawLapRecord, RawResultRecord, SessionInfo,
};
