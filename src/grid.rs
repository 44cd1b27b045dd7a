//! Grid geometry and the ordered cell selection
//!
//! The canvas is split into `size × size` square cells. A cell is addressed
//! by `(row, col)` where `row` runs along the x axis and `col` along the y axis.

use std::fmt;

/// A single grid cell, zero-based
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub row: u32,
    pub col: u32,
}

impl Cell {
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

impl From<(u32, u32)> for Cell {
    fn from((row, col): (u32, u32)) -> Self {
        Self { row, col }
    }
}

/// Formats as `row,col`, the unit the password is built from
impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

/// Fixed square partition of the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    canvas_width: u32,
    canvas_height: u32,
    size: u32,
    cell_size: u32,
}

impl Grid {
    /// Create a grid of `size × size` cells over a `width × height` canvas.
    ///
    /// Cell size is `width / size` (integer division), so a trailing strip of
    /// up to `size - 1` pixels may be left over on the right and bottom.
    /// Degenerate inputs are clamped so the cell size is never zero.
    pub fn new(canvas_width: u32, canvas_height: u32, size: u32) -> Self {
        let size = size.max(1);
        let cell_size = (canvas_width / size).max(1);
        Self {
            canvas_width,
            canvas_height,
            size,
            cell_size,
        }
    }

    #[inline]
    pub fn canvas_width(&self) -> u32 {
        self.canvas_width
    }

    #[inline]
    pub fn canvas_height(&self) -> u32 {
        self.canvas_height
    }

    /// Number of cells along each axis
    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Edge length of one cell in pixels
    #[inline]
    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Whether the cell lies inside `[0, size)` on both axes
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.size && cell.col < self.size
    }

    /// Map a canvas pixel to the cell under it.
    ///
    /// Callers pass clicks that originate on the canvas. Pixels in the
    /// leftover strip past the last full cell map outside the grid and
    /// yield `None`.
    pub fn map_pixel_to_cell(&self, x: u32, y: u32) -> Option<Cell> {
        let cell = Cell::new(x / self.cell_size, y / self.cell_size);
        self.contains(cell).then_some(cell)
    }

    /// Top-left pixel of a cell
    pub fn cell_origin(&self, cell: Cell) -> (u32, u32) {
        (cell.row * self.cell_size, cell.col * self.cell_size)
    }

    /// Iterate every cell, column-major like the drawing order
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.size).flat_map(move |row| (0..self.size).map(move |col| Cell::new(row, col)))
    }
}

/// Result of toggling a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Added,
    Removed,
}

/// Ordered set of selected cells
///
/// Insertion order is kept, and a cell is present at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    cells: Vec<Cell>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the cell if absent, otherwise remove it in place
    pub fn toggle(&mut self, cell: Cell) -> Toggle {
        if let Some(idx) = self.cells.iter().position(|c| *c == cell) {
            self.cells.remove(idx);
            Toggle::Removed
        } else {
            self.cells.push(cell);
            Toggle::Added
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn as_slice(&self) -> &[Cell] {
        &self.cells
    }

    /// Join cells as `row,col` separated by `-`, in selection order
    pub fn to_password(&self) -> String {
        self.cells
            .iter()
            .map(Cell::to_string)
            .collect::<Vec<_>>()
            .join("-")
    }
}

impl<'a> IntoIterator for &'a Selection {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}
