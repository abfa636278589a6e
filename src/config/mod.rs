mod theme;

pub use theme::Theme;

use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{DisplayNameError, Result};

pub const CONFIG_DIR: &str = "display-name";
const MAIN_CONFIG_FILE: &str = "config.toml";
const THEME_FILE: &str = "theme.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub general: GeneralConfig,
    pub form: FormConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub log_level: String,
    pub log_file: Option<PathBuf>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Heading shown above the fields
    pub title: String,
    /// Skip required-field validation before submitting
    pub novalidate: bool,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            title: "Display Full Name".to_string(),
            novalidate: false,
        }
    }
}

pub struct ConfigManager {
    config_dir: PathBuf,
    app_config: AppConfig,
    theme: Theme,
}

impl ConfigManager {
    /// Load from `dir`, or from the platform config directory when `None`
    pub fn new(dir: Option<&Path>) -> Result<Self> {
        let config_dir = match dir {
            Some(dir) => dir.to_path_buf(),
            None => Self::get_config_dir()?,
        };
        Ok(Self::from_dir(config_dir))
    }

    pub fn from_dir(config_dir: PathBuf) -> Self {
        let app_config = Self::load_app_config(&config_dir);
        let theme = Self::load_theme(&config_dir);
        tracing::debug!("Loaded configuration from {}", config_dir.display());

        Self {
            config_dir,
            app_config,
            theme,
        }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn app_config(&self) -> &AppConfig {
        &self.app_config
    }

    pub fn app_config_mut(&mut self) -> &mut AppConfig {
        &mut self.app_config
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    fn get_config_dir() -> Result<PathBuf> {
        BaseDirs::new()
            .map(|dirs| dirs.config_dir().join(CONFIG_DIR))
            .ok_or_else(|| DisplayNameError::Config("Could not determine config directory".to_string()))
    }

    fn load_app_config(config_dir: &Path) -> AppConfig {
        let path = config_dir.join(MAIN_CONFIG_FILE);
        Self::load_toml_file(&path).unwrap_or_default()
    }

    fn load_theme(config_dir: &Path) -> Theme {
        let path = config_dir.join(THEME_FILE);
        Self::load_toml_file(&path).unwrap_or_default()
    }

    fn load_toml_file<T: for<'de> Deserialize<'de> + Default>(path: &Path) -> Option<T> {
        if !path.exists() {
            return None;
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => Some(config),
                Err(e) => {
                    tracing::warn!("Failed to parse {}: {}", path.display(), e);
                    None
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", path.display(), e);
                None
            }
        }
    }

    pub fn ensure_config_dir(&self) -> Result<()> {
        if !self.config_dir.exists() {
            std::fs::create_dir_all(&self.config_dir)
                .map_err(|e| DisplayNameError::Config(format!("Failed to create config dir: {}", e)))?;
        }
        Ok(())
    }

    /// Write default `config.toml` and `theme.toml`, leaving existing files alone.
    /// Returns the paths that were written.
    pub fn write_default_configs(&self) -> Result<Vec<PathBuf>> {
        self.ensure_config_dir()?;
        let mut written = Vec::new();

        let main_path = self.config_dir.join(MAIN_CONFIG_FILE);
        if !main_path.exists() {
            let content = toml::to_string_pretty(&AppConfig::default())
                .map_err(|e| DisplayNameError::Config(format!("Failed to serialize config: {}", e)))?;
            std::fs::write(&main_path, content)
                .map_err(|e| DisplayNameError::Config(format!("Failed to write config: {}", e)))?;
            written.push(main_path);
        }

        let theme_path = self.config_dir.join(THEME_FILE);
        if !theme_path.exists() {
            let content = toml::to_string_pretty(&Theme::default())
                .map_err(|e| DisplayNameError::Config(format!("Failed to serialize theme: {}", e)))?;
            std::fs::write(&theme_path, content)
                .map_err(|e| DisplayNameError::Config(format!("Failed to write theme: {}", e)))?;
            written.push(theme_path);
        }

        Ok(written)
    }
}
