mod config;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde_json::{json, Value};
use session_core::{
    get_circuit_info, get_drivers, get_session_info, normalize_laps, normalize_results,
    SessionSnapshot,
};
use std::{fs, path::PathBuf};

/// Print one normalized view of a stored timing session as JSON.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Season, e.g. 2021
    year: i32,
    /// Event name, e.g. Monaco
    event: String,
    /// Session type: R, Q, S, FP1, FP2, FP3
    session_type: String,
    #[arg(value_enum)]
    view: View,
    /// Driver abbreviation to filter laps by (VER, HAM...)
    #[arg(long)]
    driver: Option<String>,
    #[arg(long, env = "SESSION_DUMP_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum View {
    Info,
    Drivers,
    Laps,
    Results,
    Circuit,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let cfg = config::DumpConfig::resolve(args.config.as_deref())?;

    let path = cfg.snapshot_path(args.year, &args.event, &args.session_type);
    tracing::info!("loading session from {}", path.display());
    let data = fs::read_to_string(&path)
        .with_context(|| format!("session not found: {}", path.display()))?;
    let session = SessionSnapshot::from_json(&data)
        .with_context(|| format!("failed to parse session {}", path.display()))?;

    let reply = render(&session, args.view, args.driver.as_deref())?;
    let out = if cfg.pretty {
        serde_json::to_string_pretty(&reply)?
    } else {
        serde_json::to_string(&reply)?
    };
    println!("{out}");
    Ok(())
}

fn render(session: &SessionSnapshot, view: View, driver: Option<&str>) -> Result<Value> {
    let reply = match view {
        View::Info => match get_session_info(session) {
            Some(info) => serde_json::to_value(info)?,
            None => json!({}),
        },
        View::Drivers => json!({ "drivers": get_drivers(session) }),
        View::Laps => {
            let laps = normalize_laps(session, driver);
            json!({ "count": laps.len(), "laps": laps, "driver": driver })
        }
        View::Results => json!({ "results": normalize_results(session) }),
        View::Circuit => serde_json::to_value(get_circuit_info(session))?,
    };
    Ok(reply)
}
