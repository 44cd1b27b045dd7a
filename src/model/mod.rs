//! Application model - all state lives here
//!
//! Owned by the runtime's `App` and mutated only through `update`.

pub mod selector;
pub mod ui;

pub use selector::GridSelector;
pub use ui::{StatusKind, StatusMessage, UiState};

use crate::config::AppConfig;
use crate::grid::Grid;
use crate::theme::Theme;
use crate::view::Layout;

pub struct AppModel {
    pub selector: GridSelector,
    pub layout: Layout,
    pub theme: Theme,
    pub config: AppConfig,
    pub ui: UiState,
}

impl AppModel {
    pub fn new(config: AppConfig) -> Self {
        let grid = Grid::new(config.canvas_width, config.canvas_height, config.grid_size);
        Self {
            selector: GridSelector::new(grid),
            layout: Layout::new(&grid),
            theme: config.theme.clone(),
            config,
            ui: UiState::new(),
        }
    }

    /// Window size in physical pixels
    pub fn window_size(&self) -> (u32, u32) {
        (self.layout.width as u32, self.layout.height as u32)
    }
}
