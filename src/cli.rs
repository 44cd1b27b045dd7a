//! Command-line argument parsing
//!
//! Every flag overrides the matching value from `config.yaml`.

use clap::Parser;
use std::path::PathBuf;

use crate::config::AppConfig;

/// Click grid cells to build a graphical password
#[derive(Parser, Debug, Default)]
#[command(
    name = "gridpass",
    version,
    about = "Click grid cells to build a graphical password"
)]
pub struct CliArgs {
    /// Canvas width in pixels
    #[arg(long, value_name = "PX")]
    pub width: Option<u32>,

    /// Canvas height in pixels
    #[arg(long, value_name = "PX")]
    pub height: Option<u32>,

    /// Number of cells along each axis
    #[arg(short = 'g', long, value_name = "N")]
    pub grid_size: Option<u32>,

    /// Where to write the password image
    #[arg(short = 'o', long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Font file for cell labels
    #[arg(long, value_name = "PATH")]
    pub font: Option<PathBuf>,

    /// Load this config file instead of the default one
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl CliArgs {
    /// Load the config file and apply CLI overrides on top
    pub fn into_config(self) -> AppConfig {
        let base = match &self.config {
            Some(path) => AppConfig::load_from(path),
            None => AppConfig::load(),
        };
        self.apply(base)
    }

    /// Apply CLI overrides to an already loaded config
    pub fn apply(self, mut config: AppConfig) -> AppConfig {
        if let Some(width) = self.width {
            config.canvas_width = width;
        }
        if let Some(height) = self.height {
            config.canvas_height = height;
        }
        if let Some(size) = self.grid_size {
            config.grid_size = size;
        }
        if let Some(output) = self.output {
            config.output_path = output;
        }
        if let Some(font) = self.font {
            config.font_path = Some(font);
        }
        config.validated()
    }
}
