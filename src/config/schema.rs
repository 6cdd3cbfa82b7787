use std::path::PathBuf;

use serde::Deserialize;

use crate::organize::DEFAULT_EXTENSION;

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/tuneshelf/config.toml` or `~/.config/tuneshelf/config.toml`
///
/// Precedence (highest wins):
/// 1) Command-line flags (applied by the runtime after loading)
/// 2) Environment variables (prefix `TUNESHELF__`, `__` as nested separator)
/// 3) Config file (if present)
/// 4) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub library: LibrarySettings,
    pub output: OutputSettings,
    pub overrides: OverrideSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// Extensions of the files to organize, including the dot.
    ///
    /// Matching is exact and case-sensitive: `".MP3"` does not match `".mp3"`.
    pub extensions: Vec<String>,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            extensions: vec![DEFAULT_EXTENSION.to_string()],
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Root of the organized tree.
    pub dir: Option<PathBuf>,
}

/// Values forced over the embedded tags. Empty strings count as unset.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OverrideSettings {
    pub artist: Option<String>,
    pub album: Option<String>,
    /// Only written into the copies' tags; never used for the path.
    pub album_artist: Option<String>,
}
