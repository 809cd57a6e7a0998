use std::path::Path;

use ankibot_config::Config;

const DEFAULT_CONFIG_PATH: &str = "config.json";

/// Load the config file given on the command line, else `./config.json`, else
/// the built-in defaults. Environment overrides apply on top in every case.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let config = match path {
        Some(path) => {
            tracing::info!("Loading config from {}", path.display());
            Config::from_file(path)?
        }
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
            tracing::info!("Loading repo default config...");
            Config::from_file(Path::new(DEFAULT_CONFIG_PATH))?
        }
        None => {
            tracing::warn!("No config file found, using defaults");
            Config::new()?
        }
    };

    tracing::debug!(?config, "Config loaded");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let result = load_config(Some(Path::new("does/not/exist.json")));
        assert!(result.is_err());
    }
}
