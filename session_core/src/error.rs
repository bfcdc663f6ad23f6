use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures raised while reading a session handle. None of these cross the
/// public operations; they are logged and mapped to that operation's empty reply.
#[derive(Error, Debug)]
pub enum Error {
    /// A whole section of the session (laps, results, circuit...) was never loaded.
    #[error("session section not loaded: {0}")]
    NotLoaded(&'static str),

    #[error("missing field `{0}`")]
    MissingField(&'static str),

    #[error("driver not found: {0}")]
    DriverNotFound(String),

    #[error("invalid value for `{field}`: {value}")]
    InvalidValue { field: &'static str, value: String },

    /// Position trace whose X and Y columns disagree in length.
    #[error("malformed position trace for driver {driver} lap {lap}: {x_len} x vs {y_len} y")]
    MalformedTrace {
        driver: String,
        lap: i64,
        x_len: usize,
        y_len: usize,
    },
}
