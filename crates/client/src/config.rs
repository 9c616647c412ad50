//! Client configuration from environment variables.
use std::env;
use std::path::PathBuf;

/// Where the client finds its data and writes its logs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientConfig {
    /// Directory holding `rows.ron` and `config.toml`.
    pub data_dir: PathBuf,
    /// Directory for daily rolling log files; stderr only when unset.
    pub log_dir: Option<PathBuf>,
    /// Unlock snapshot file; every spell is locked when unset.
    pub unlocks: Option<PathBuf>,
    /// Overrides `hide_locked` from `config.toml`.
    pub hide_locked: Option<bool>,
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `GRIMOIRE_DATA_DIR` - Data directory (default: platform-specific, then `./data`)
    /// - `GRIMOIRE_LOG_DIR` - Log file directory (default: none)
    /// - `GRIMOIRE_UNLOCKS` - Unlock snapshot file (default: none)
    /// - `GRIMOIRE_HIDE_LOCKED` - Hide locked spells (default: from `config.toml`)
    pub fn from_env() -> Self {
        Self {
            data_dir: env::var_os("GRIMOIRE_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(default_data_dir),
            log_dir: env::var_os("GRIMOIRE_LOG_DIR").map(PathBuf::from),
            unlocks: env::var_os("GRIMOIRE_UNLOCKS").map(PathBuf::from),
            hide_locked: read_env::<bool>("GRIMOIRE_HIDE_LOCKED"),
        }
    }
}

/// Platform data directory if it already holds catalog rows, else `./data`.
///
/// - Linux: `~/.local/share/grimoire` (or `$XDG_DATA_HOME/grimoire`)
/// - macOS: `~/Library/Application Support/grimoire`
/// - Windows: `%APPDATA%\grimoire`
fn default_data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "grimoire")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .filter(|dir| dir.join("rows.ron").exists())
        .unwrap_or_else(|| PathBuf::from("./data"))
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
