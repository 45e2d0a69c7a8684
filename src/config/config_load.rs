// src/config/config_load.rs
//
// loading of config.toml

use super::{AnimationConfig, StyleConfig, WindowConfig};
use serde::Deserialize;
use std::error::Error;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub animation: AnimationConfig,
    pub style: StyleConfig,
}

impl Config {
    pub fn load() -> Result<Self, Box<dyn Error>> {
        // First try to load from the executable's directory
        if let Some(exe_config) = Self::load_from_exe_dir() {
            return exe_config;
        }

        // Fallback to loading from the current working directory
        Self::load_from_path("config.toml")
    }

    fn load_from_exe_dir() -> Option<Result<Self, Box<dyn Error>>> {
        let exe_path = std::env::current_exe().ok()?;
        let config_path = exe_path.parent()?.join("config.toml");

        if config_path.exists() {
            Some(Self::load_from_path(&config_path))
        } else {
            None
        }
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, Box<dyn Error>> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), Box<dyn Error>> {
        self.animation.validate()?;

        if self.window.width == 0 || self.window.height == 0 {
            return Err("window size must be non-zero".into());
        }

        Ok(())
    }
}
