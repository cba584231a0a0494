use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const FILENAME: &str = "config.yaml";
const APP_DIR: &str = "cvdeck";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defaults: Option<DefaultsConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition: Option<String>,

    /// "deck", "portfolio", or a slide number to start on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_mode: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_play: Option<bool>,
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|d| d.join(APP_DIR).join(FILENAME))
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                anyhow::anyhow!("No config found. Run `cvdeck config show` to see defaults.")
            } else {
                anyhow::anyhow!("Failed to read config: {e}")
            }
        })?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        let contents = format!("# cvdeck configuration\n{yaml}");
        std::fs::write(&path, contents)?;
        Ok(path)
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "defaults.theme" => {
                match value {
                    "light" | "dark" => {}
                    _ => anyhow::bail!("Invalid theme: {value}. Must be 'light' or 'dark'."),
                }
                self.defaults
                    .get_or_insert_with(DefaultsConfig::default)
                    .theme = Some(value.to_string());
            }
            "defaults.transition" => {
                match value {
                    "slide" | "fade" | "none" => {}
                    _ => anyhow::bail!(
                        "Invalid transition: {value}. Must be 'slide', 'fade', or 'none'."
                    ),
                }
                self.defaults
                    .get_or_insert_with(DefaultsConfig::default)
                    .transition = Some(value.to_string());
            }
            "defaults.start_mode" => {
                if value != "deck" && value != "portfolio" && value.parse::<usize>().is_err() {
                    anyhow::bail!(
                        "Invalid start_mode: {value}. Must be 'deck', 'portfolio', or a slide number."
                    );
                }
                self.defaults
                    .get_or_insert_with(DefaultsConfig::default)
                    .start_mode = Some(value.to_string());
            }
            "defaults.auto_play" => {
                let parsed: bool = value.parse().map_err(|_| {
                    anyhow::anyhow!("Invalid auto_play: {value}. Must be 'true' or 'false'.")
                })?;
                self.defaults
                    .get_or_insert_with(DefaultsConfig::default)
                    .auto_play = Some(parsed);
            }
            _ => anyhow::bail!(
                "Unknown config key: {key}. Valid keys: defaults.theme, defaults.transition, defaults.start_mode, defaults.auto_play"
            ),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_validates_theme() {
        let mut config = Config::default();
        assert!(config.set("defaults.theme", "dark").is_ok());
        assert_eq!(
            config.defaults.as_ref().and_then(|d| d.theme.as_deref()),
            Some("dark")
        );
        assert!(config.set("defaults.theme", "sepia").is_err());
    }

    #[test]
    fn test_set_accepts_slide_number_start_mode() {
        let mut config = Config::default();
        assert!(config.set("defaults.start_mode", "portfolio").is_ok());
        assert!(config.set("defaults.start_mode", "3").is_ok());
        assert!(config.set("defaults.start_mode", "slideshow").is_err());
    }

    #[test]
    fn test_set_rejects_unknown_key() {
        let mut config = Config::default();
        assert!(config.set("defaults.autoplay_interval", "5").is_err());
    }

    #[test]
    fn test_auto_play_parses_bool() {
        let mut config = Config::default();
        assert!(config.set("defaults.auto_play", "true").is_ok());
        assert_eq!(
            config.defaults.as_ref().and_then(|d| d.auto_play),
            Some(true)
        );
        assert!(config.set("defaults.auto_play", "yes").is_err());
    }
}
