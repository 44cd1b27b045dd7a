//! Window layout and hit-testing
//!
//! The window is the canvas on top and a bar with the
//! "Generate Password" button and a status line underneath.

use crate::grid::Grid;

pub const BUTTON_WIDTH: usize = 160;
pub const BUTTON_HEIGHT: usize = 30;
pub const BAR_PADDING: usize = 10;
pub const STATUS_LINE_HEIGHT: usize = 24;

/// Total height of the bar below the canvas
pub const BAR_HEIGHT: usize = BAR_PADDING + BUTTON_HEIGHT + BAR_PADDING + STATUS_LINE_HEIGHT;

/// Axis-aligned rectangle in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl Rect {
    pub const fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether the point lies inside (inclusive start, exclusive end)
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x as f64
            && y >= self.y as f64
            && x < (self.x + self.width) as f64
            && y < (self.y + self.height) as f64
    }

    pub fn center(&self) -> (usize, usize) {
        (self.x + self.width / 2, self.y + self.height / 2)
    }
}

/// What a pointer position lands on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    /// Canvas pixel, relative to the canvas origin
    Canvas { x: u32, y: u32 },
    Button,
    None,
}

/// Pixel layout of the window, derived once from the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub width: usize,
    pub height: usize,
    pub canvas: Rect,
    pub button: Rect,
    pub status: Rect,
}

impl Layout {
    pub fn new(grid: &Grid) -> Self {
        let canvas_w = grid.canvas_width() as usize;
        let canvas_h = grid.canvas_height() as usize;
        let width = canvas_w.max(BUTTON_WIDTH + 2 * BAR_PADDING);
        let height = canvas_h + BAR_HEIGHT;

        let button = Rect::new(
            (width - BUTTON_WIDTH) / 2,
            canvas_h + BAR_PADDING,
            BUTTON_WIDTH,
            BUTTON_HEIGHT,
        );
        let status = Rect::new(
            0,
            button.y + BUTTON_HEIGHT + BAR_PADDING,
            width,
            STATUS_LINE_HEIGHT,
        );

        Self {
            width,
            height,
            canvas: Rect::new(0, 0, canvas_w, canvas_h),
            button,
            status,
        }
    }

    /// Hit-test a window position in physical pixels
    pub fn hit_test(&self, x: f64, y: f64) -> Hit {
        if self.canvas.contains(x, y) {
            Hit::Canvas {
                x: x as u32,
                y: y as u32,
            }
        } else if self.button.contains(x, y) {
            Hit::Button
        } else {
            Hit::None
        }
    }
}
