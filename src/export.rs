//! Password image export
//!
//! Renders the grid and markers offscreen with the same primitives as the
//! window and writes an RGB PNG. Cell labels are not part of the image.

use std::path::Path;

use image::{ImageFormat, Rgb, RgbImage};

use crate::error::{GridError, Result};
use crate::model::GridSelector;
use crate::theme::Theme;
use crate::view::canvas::render_canvas;
use crate::view::Frame;

/// Render the current selection to an image of exactly the canvas size
pub fn render_image(selector: &GridSelector, theme: &Theme) -> RgbImage {
    let grid = selector.grid();
    let width = grid.canvas_width();
    let height = grid.canvas_height();

    let mut buffer = vec![0u32; width as usize * height as usize];
    let mut frame = Frame::new(&mut buffer, width as usize, height as usize);
    render_canvas(&mut frame, grid, selector.selection(), theme, None);

    // ARGB (0xAARRGGBB) to RGB, dropping alpha
    RgbImage::from_fn(width, height, |x, y| {
        let pixel = buffer[(y * width + x) as usize];
        Rgb([
            ((pixel >> 16) & 0xFF) as u8,
            ((pixel >> 8) & 0xFF) as u8,
            (pixel & 0xFF) as u8,
        ])
    })
}

/// Render the current selection and write it as PNG to `path`
pub fn render_and_save(selector: &GridSelector, theme: &Theme, path: &Path) -> Result<()> {
    let img = render_image(selector, theme);
    img.save_with_format(path, ImageFormat::Png)
        .map_err(|source| GridError::ImageWrite {
            path: path.to_path_buf(),
            source,
        })?;
    tracing::debug!(
        "Wrote {}x{} password image to {}",
        img.width(),
        img.height(),
        path.display()
    );
    Ok(())
}
