use std::path::{Path, PathBuf};

use crate::config;
use crate::library::MetadataOverride;
use crate::organize::RunConfig;

use super::cli::Cli;

/// Why the settings could not be turned into a run.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to load config")]
    Load(#[from] ::config::ConfigError),

    #[error("invalid config: {0}")]
    Invalid(String),

    #[error("output-dir required")]
    MissingOutputDir,
}

/// Load file/env settings and layer the command-line flags on top.
///
/// A missing config file is fine; a malformed one is an error.
pub fn load_settings(cli: &Cli) -> Result<config::Settings, SettingsError> {
    let mut settings = config::Settings::load()?;
    apply_cli(&mut settings, cli);
    settings.validate().map_err(SettingsError::Invalid)?;
    Ok(settings)
}

pub fn apply_cli(settings: &mut config::Settings, cli: &Cli) {
    if let Some(dir) = &cli.output_dir {
        settings.output.dir = Some(dir.clone());
    }
    if let Some(exts) = &cli.extensions {
        settings.library.extensions = exts.clone();
    }
    if cli.artist.is_some() {
        settings.overrides.artist = cli.artist.clone();
    }
    if cli.album.is_some() {
        settings.overrides.album = cli.album.clone();
    }
    if cli.album_artist.is_some() {
        settings.overrides.album_artist = cli.album_artist.clone();
    }
}

/// The output directory; unlike everything else it has no default.
pub fn output_dir(settings: &config::Settings) -> Result<PathBuf, SettingsError> {
    settings
        .output
        .dir
        .clone()
        .filter(|d| !d.as_os_str().is_empty())
        .ok_or(SettingsError::MissingOutputDir)
}

pub fn run_config(settings: &config::Settings, output_root: &Path) -> RunConfig {
    let o = &settings.overrides;
    RunConfig {
        extensions: settings.library.extensions.iter().cloned().collect(),
        overrides: MetadataOverride::new(o.artist.clone(), o.album.clone(), o.album_artist.clone()),
        output_root: Some(output_root.to_path_buf()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn flags_win_over_loaded_settings() {
        let mut settings = config::Settings::default();
        settings.output.dir = Some(PathBuf::from("/from/file"));
        settings.overrides.album = Some("From File".into());

        let cli = Cli::try_parse_from(["tuneshelf", "-o", "/from/flag", "-a", "Flag", "in"]).unwrap();
        apply_cli(&mut settings, &cli);

        assert_eq!(settings.output.dir, Some(PathBuf::from("/from/flag")));
        assert_eq!(settings.overrides.artist.as_deref(), Some("Flag"));
        assert_eq!(settings.overrides.album.as_deref(), Some("From File"));
    }

    #[test]
    fn output_dir_is_required() {
        let settings = config::Settings::default();
        assert!(matches!(
            output_dir(&settings),
            Err(SettingsError::MissingOutputDir)
        ));
    }

    #[test]
    fn load_failure_keeps_its_cause() {
        let err = SettingsError::from(::config::ConfigError::Message("bad toml".into()));
        assert_eq!(crate::error_chain(&err), "failed to load config: bad toml");
    }

    #[test]
    fn run_config_drops_empty_overrides() {
        let mut settings = config::Settings::default();
        settings.overrides.artist = Some(String::new());
        settings.library.extensions = vec![".mp3".into(), ".mp3".into(), ".flac".into()];

        let rc = run_config(&settings, Path::new("/out"));
        assert!(!rc.overrides.active());
        assert_eq!(rc.extensions.len(), 2);
        assert_eq!(rc.output_root, Some(PathBuf::from("/out")));
    }
}
