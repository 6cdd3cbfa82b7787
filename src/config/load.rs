use std::{env, path::PathBuf};

use super::schema::Settings;

/// Configuration loading helpers.
///
/// `Settings::load` reads an optional config file, then layers environment
/// variables (prefix `TUNESHELF__`) on top, falling back to struct defaults.
impl Settings {
    /// Load settings from an optional config file and the environment.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("TUNESHELF")
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("library.extensions"),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        if self.library.extensions.is_empty() {
            return Err("library.extensions must list at least one extension".to_string());
        }
        if let Some(bad) = self
            .library
            .extensions
            .iter()
            .find(|e| e.len() < 2 || !e.starts_with('.'))
        {
            return Err(format!(
                "library.extensions entries must start with a dot, got {bad:?}"
            ));
        }
        Ok(())
    }
}

/// Resolve the config path from `TUNESHELF_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("TUNESHELF_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/tuneshelf/config.toml`
/// or `~/.config/tuneshelf/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
    };

    config_home.map(|d| d.join("tuneshelf").join("config.toml"))
}
