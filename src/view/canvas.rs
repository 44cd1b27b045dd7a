//! Grid canvas rendering
//!
//! Always a full redraw from the current selection: background, cell
//! outlines, optional cell labels, then one marker per selected cell.

use crate::grid::{Cell, Grid, Selection};
use crate::theme::Theme;

use super::frame::{Frame, TextPainter};
use super::geometry::Rect;

/// Gap between a cell edge and its marker circle
pub const MARKER_INSET: u32 = 10;

/// Stroke width of the marker circle
pub const MARKER_STROKE: f32 = 2.0;

/// Paint the grid and markers into the top-left `canvas_width × canvas_height`
/// region of the frame. Nothing is drawn outside that region.
pub fn render_canvas(
    frame: &mut Frame,
    grid: &Grid,
    selection: &Selection,
    theme: &Theme,
    mut labels: Option<&mut TextPainter>,
) {
    let cell = grid.cell_size() as usize;
    let canvas = Rect::new(
        0,
        0,
        grid.canvas_width() as usize,
        grid.canvas_height() as usize,
    );
    frame.set_clip(canvas);
    frame.fill_rect_px(
        canvas.x,
        canvas.y,
        canvas.width,
        canvas.height,
        theme.background.to_argb_u32(),
    );

    let line = theme.grid_line.to_argb_u32();
    let label = theme.label.to_argb_u32();
    for c in grid.cells() {
        let (x, y) = grid.cell_origin(c);
        let (x, y) = (x as usize, y as usize);
        // Outline spans both edges inclusively, so neighbours share a line
        frame.stroke_rect_px(x, y, cell + 1, cell + 1, line);

        if let Some(painter) = labels.as_deref_mut() {
            let text = format!("({},{})", c.row, c.col);
            painter.draw_centered(frame, x + cell / 2, y + cell / 2, &text, label);
        }
    }

    let marker = theme.marker.to_argb_u32();
    for &c in selection {
        draw_marker(frame, grid, c, marker);
    }
    frame.clear_clip();
}

/// Circle inset by [`MARKER_INSET`] from each edge of the cell
fn draw_marker(frame: &mut Frame, grid: &Grid, cell: Cell, color: u32) {
    let size = grid.cell_size() as f32;
    let (x, y) = grid.cell_origin(cell);
    let cx = x as f32 + size / 2.0;
    let cy = y as f32 + size / 2.0;
    let radius = (size - 2.0 * MARKER_INSET as f32) / 2.0;
    // Cells too small for the inset still get a visible dot
    let radius = if radius > 0.0 { radius } else { size / 2.0 };
    frame.stroke_circle(cx, cy, radius, MARKER_STROKE, color);
}
