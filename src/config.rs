//! Configuration handling for the contact form

use crate::state::options::DEFAULT_COLOUR;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// User configuration for the contact form
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormConfig {
    /// Colour selected on start and after every reset
    pub default_colour: Option<String>,
    /// Render the password as bullets
    pub mask_password: Option<bool>,
}

impl FormConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "contact-form", "contact-form-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration, writing the defaults out on first run so there
    /// is a file to edit
    pub fn load_or_create() -> Result<Self> {
        let config = Self::load()?;
        if Self::config_path().is_some_and(|path| !path.exists()) {
            config.save()?;
        }
        Ok(config)
    }

    fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: FormConfig = serde_json::from_str(&content)?;
        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            self.save_to(&path)?;
        }
        Ok(())
    }

    fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        tracing::debug!(path = %path.display(), "Saved config");
        Ok(())
    }

    pub fn default_colour(&self) -> &str {
        self.default_colour.as_deref().unwrap_or(DEFAULT_COLOUR)
    }

    pub fn mask_password(&self) -> bool {
        self.mask_password.unwrap_or(false)
    }
}
