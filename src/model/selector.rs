//! GridSelector - grid geometry plus the ordered selection

use crate::error::{GridError, Result};
use crate::grid::{Cell, Grid, Selection, Toggle};

/// Owns the grid and the cells the user has toggled on
#[derive(Debug, Clone)]
pub struct GridSelector {
    grid: Grid,
    selection: Selection,
}

impl GridSelector {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            selection: Selection::new(),
        }
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Map a canvas pixel to a cell, see [`Grid::map_pixel_to_cell`]
    pub fn map_pixel_to_cell(&self, x: u32, y: u32) -> Option<Cell> {
        self.grid.map_pixel_to_cell(x, y)
    }

    /// Toggle a cell. Cells outside the grid are ignored and return `None`.
    pub fn toggle_cell(&mut self, cell: Cell) -> Option<Toggle> {
        if !self.grid.contains(cell) {
            tracing::debug!(row = cell.row, col = cell.col, "ignoring cell outside grid");
            return None;
        }
        Some(self.selection.toggle(cell))
    }

    /// Toggle whatever cell lies under a canvas pixel
    pub fn click(&mut self, x: u32, y: u32) -> Option<(Cell, Toggle)> {
        let cell = self.map_pixel_to_cell(x, y)?;
        self.toggle_cell(cell).map(|t| (cell, t))
    }

    /// Build the password string from the current selection
    pub fn generate_password(&self) -> Result<String> {
        if self.selection.is_empty() {
            return Err(GridError::EmptySelection);
        }
        Ok(self.selection.to_password())
    }
}
