use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, PartialEq, Deserialize)]
pub(crate) struct Config {
    /// Track file to use instead of ~/.track.toml
    #[serde(default)]
    pub(crate) file: Option<PathBuf>,
    #[serde(default)]
    pub(crate) debug: bool,
}

/// Result of looking for a config file.
///
/// Logging is set up from the merged configuration, so anything worth
/// reporting about the lookup is collected here and logged afterwards.
#[derive(Debug, Default)]
pub(crate) struct LoadedConfig {
    pub(crate) config: Config,
    pub(crate) path: Option<PathBuf>,
    pub(crate) warnings: Vec<String>,
}

impl Config {
    pub(crate) fn load() -> LoadedConfig {
        Self::load_from(&Self::get_config_paths())
    }

    fn load_from(paths: &[PathBuf]) -> LoadedConfig {
        let mut loaded = LoadedConfig::default();

        for path in paths {
            if !path.exists() {
                continue;
            }
            match Self::parse_file(path) {
                Ok(config) => {
                    loaded.config = config;
                    loaded.path = Some(path.clone());
                    return loaded;
                }
                Err(e) => loaded
                    .warnings
                    .push(format!("Failed to parse {}: {}", path.display(), e)),
            }
        }

        loaded
    }

    fn parse_file(path: &Path) -> Result<Config, String> {
        let content = fs::read_to_string(path).map_err(|e| e.to_string())?;
        toml::from_str::<Config>(&content).map_err(|e| e.to_string())
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. Platform config dir: $XDG_CONFIG_HOME/track or ~/Library/Application Support/track
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("track").join("config.toml"));
        }

        // 2. ~/.config/track/config.toml, for macOS users who keep dotfiles there
        if let Some(home) = dirs::home_dir() {
            let xdg_path = home.join(".config").join("track").join("config.toml");
            if !paths.contains(&xdg_path) {
                paths.push(xdg_path);
            }
        }

        paths
    }
}
