//! Application configuration
//!
//! Read from `~/.config/gridpass/config.yaml` (or a path given with
//! `--config`). Every field is optional; missing or unreadable files fall
//! back to defaults.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::theme::Theme;

pub const DEFAULT_CANVAS_WIDTH: u32 = 400;
pub const DEFAULT_CANVAS_HEIGHT: u32 = 400;
pub const DEFAULT_GRID_SIZE: u32 = 7;
pub const DEFAULT_OUTPUT_PATH: &str = "graphical_password.png";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub grid_size: u32,
    /// Where the password image is written
    pub output_path: PathBuf,
    /// Font for cell labels and the button caption
    pub font_path: Option<PathBuf>,
    pub theme: Theme,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            grid_size: DEFAULT_GRID_SIZE,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            font_path: None,
            theme: Theme::default(),
        }
    }
}

impl AppConfig {
    /// Load config from the default location, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        Self::load_from(&path)
    }

    /// Load config from an explicit path, falling back to defaults on error
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Parse and validate a YAML document
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        // An empty document deserializes as unit, not as an empty mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(content)?;
        Ok(config.validated())
    }

    /// Replace values that cannot form a usable grid with their defaults
    pub fn validated(mut self) -> Self {
        if self.grid_size == 0 {
            tracing::warn!(
                "grid_size must be at least 1, using {}",
                DEFAULT_GRID_SIZE
            );
            self.grid_size = DEFAULT_GRID_SIZE;
        }
        if self.canvas_width < self.grid_size {
            tracing::warn!(
                "canvas_width {} is smaller than grid_size {}, using {}",
                self.canvas_width,
                self.grid_size,
                DEFAULT_CANVAS_WIDTH
            );
            self.canvas_width = DEFAULT_CANVAS_WIDTH.max(self.grid_size);
        }
        if self.canvas_height == 0 {
            tracing::warn!(
                "canvas_height must be positive, using {}",
                DEFAULT_CANVAS_HEIGHT
            );
            self.canvas_height = DEFAULT_CANVAS_HEIGHT;
        }
        let grid_extent = self.grid_size * (self.canvas_width / self.grid_size);
        if self.canvas_height < grid_extent {
            tracing::warn!(
                "canvas_height {} cannot fit {} rows of {} px, using {}x{} with grid_size {}",
                self.canvas_height,
                self.grid_size,
                self.canvas_width / self.grid_size,
                DEFAULT_CANVAS_WIDTH,
                DEFAULT_CANVAS_HEIGHT,
                DEFAULT_GRID_SIZE
            );
            self.canvas_width = DEFAULT_CANVAS_WIDTH;
            self.canvas_height = DEFAULT_CANVAS_HEIGHT;
            self.grid_size = DEFAULT_GRID_SIZE;
        }
        self
    }
}
