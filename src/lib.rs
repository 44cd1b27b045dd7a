//! gridpass - graphical password grid
//!
//! Click cells on a fixed grid to build an ordered list of coordinates,
//! render it, and save it as an image. State flows through an Elm-style
//! `Msg` → `update` → `Cmd` loop; the winit runtime lives in the binary.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod effects;
pub mod error;
pub mod export;
pub mod grid;
pub mod input;
pub mod messages;
pub mod model;
pub mod theme;
pub mod tracing;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::AppConfig;
pub use error::GridError;
pub use grid::{Cell, Grid, Selection};
pub use messages::Msg;
pub use model::{AppModel, GridSelector};
pub use theme::Theme;
