use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) no_breakdown: bool,
    #[serde(default)]
    pub(crate) label: Option<String>,
}

impl Config {
    /// Load config quietly: a hook writes nothing to stderr on success, and a
    /// broken config file must not break the statusline.
    pub(crate) fn load() -> Self {
        for path in Self::get_config_paths() {
            if path.exists()
                && let Ok(content) = fs::read_to_string(&path)
                && let Ok(config) = toml::from_str::<Config>(&content)
            {
                return config;
            }
        }
        Self::default()
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/ccworth/config.toml (Linux/cross-platform)
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("ccworth").join("config.toml"));
        }

        // 2. Platform config dir (macOS: ~/Library/Application Support)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("ccworth").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.ccworth.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".ccworth.toml"));
        }

        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_paths_are_discovered() {
        let paths = Config::get_config_paths();
        assert!(!paths.is_empty());
        assert!(paths.iter().all(|p| p.to_string_lossy().contains("ccworth")));
    }

    #[test]
    fn parses_full_config() {
        let config: Config =
            toml::from_str("no_breakdown = true\nlabel = \"AI\"\n").unwrap();
        assert!(config.no_breakdown);
        assert_eq!(config.label.as_deref(), Some("AI"));
    }

    #[test]
    fn missing_fields_use_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(!config.no_breakdown);
        assert_eq!(config.label, None);
    }
}
