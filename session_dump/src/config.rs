use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct DumpConfig {
    /// Directory holding `<year>_<event>_<session_type>.json` snapshots.
    pub snapshot_dir: PathBuf,
    pub pretty: bool,
}

impl Default for DumpConfig {
    fn default() -> Self {
        Self {
            snapshot_dir: PathBuf::from("snapshots"),
            pretty: true,
        }
    }
}

impl DumpConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;
        serde_json::from_str(&data).with_context(|| format!("invalid config JSON in {}", path.display()))
    }

    /// Explicit path first, then the usual spots relative to the working
    /// directory and the executable. Defaults when none exists.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let candidates = [
            PathBuf::from("session_dump.json"),
            PathBuf::from("config/session_dump.json"),
            {
                let mut p = std::env::current_exe().unwrap_or_else(|_| PathBuf::from("."));
                p.pop(); // exe dir
                p.push("session_dump.json");
                p
            },
        ];
        for c in candidates {
            if c.exists() {
                tracing::debug!("using config {}", c.display());
                return Self::load(&c);
            }
        }

        tracing::debug!("no config file found, using defaults");
        Ok(Self::default())
    }

    pub fn snapshot_path(&self, year: i32, event: &str, session_type: &str) -> PathBuf {
        self.snapshot_dir.join(format!("{year}_{event}_{session_type}.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let cfg: DumpConfig = serde_json::from_str(r#"{ "snapshot_dir": "/data/f1" }"#).unwrap();
        assert!(cfg.pretty);
        assert_eq!(
            cfg.snapshot_path(2021, "Monaco", "R"),
            PathBuf::from("/data/f1/2021_Monaco_R.json")
        );
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let err = DumpConfig::resolve(Some(Path::new("/nonexistent/session_dump.json"))).unwrap_err();
        assert!(err.to_string().contains("failed to read config"));
    }
}
