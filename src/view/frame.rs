//! Frame abstraction for drawing primitives
//!
//! Provides a simple, safe API for pixel buffer operations instead of
//! direct buffer indexing scattered throughout rendering code. The same
//! primitives paint the window and the exported image.

use std::collections::HashMap;

use fontdue::{Font, Metrics};

use super::geometry::Rect;

/// Glyph cache key: (character, font_size as bits)
pub type GlyphCacheKey = (char, u32);
pub type GlyphCache = HashMap<GlyphCacheKey, (Metrics, Vec<u8>)>;

/// Blend a foreground color onto a background color using alpha compositing.
///
/// Both colors are in ARGB format (0xAARRGGBB). Returns the blended color
/// with full opacity.
#[inline]
pub fn blend_colors(bg: u32, fg: u32, alpha: f32) -> u32 {
    let bg_r = ((bg >> 16) & 0xFF) as f32;
    let bg_g = ((bg >> 8) & 0xFF) as f32;
    let bg_b = (bg & 0xFF) as f32;

    let fg_r = ((fg >> 16) & 0xFF) as f32;
    let fg_g = ((fg >> 8) & 0xFF) as f32;
    let fg_b = (fg & 0xFF) as f32;

    let final_r = (bg_r * (1.0 - alpha) + fg_r * alpha) as u32;
    let final_g = (bg_g * (1.0 - alpha) + fg_g * alpha) as u32;
    let final_b = (bg_b * (1.0 - alpha) + fg_b * alpha) as u32;

    0xFF000000 | (final_r << 16) | (final_g << 8) | final_b
}

/// Clipping rectangle in pixel coordinates (inclusive start, exclusive end).
#[derive(Clone, Copy, Debug)]
struct ClipRect {
    x0: usize,
    y0: usize,
    x1: usize,
    y1: usize,
}

/// A frame buffer wrapper providing safe drawing primitives.
///
/// All coordinates are in pixels. Out-of-bounds operations are clipped,
/// to the frame and to the clip rect when one is set.
pub struct Frame<'a> {
    buffer: &'a mut [u32],
    width: usize,
    height: usize,
    clip: Option<ClipRect>,
}

impl<'a> Frame<'a> {
    /// Create a new frame from a mutable pixel buffer
    ///
    /// If the buffer is smaller than width*height, the height is reduced
    /// to what the buffer can hold.
    pub fn new(buffer: &'a mut [u32], width: usize, height: usize) -> Self {
        let height = if width > 0 && buffer.len() < width * height {
            buffer.len() / width
        } else {
            height
        };

        Self {
            buffer,
            width,
            height,
            clip: None,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Set a clipping rectangle. All subsequent drawing operations will be
    /// constrained to this region.
    pub fn set_clip(&mut self, rect: Rect) {
        let x0 = rect.x.min(self.width);
        let y0 = rect.y.min(self.height);
        let x1 = rect.x.saturating_add(rect.width).min(self.width);
        let y1 = rect.y.saturating_add(rect.height).min(self.height);
        self.clip = Some(ClipRect { x0, y0, x1, y1 });
    }

    /// Remove the clipping rectangle, restoring full-frame drawing.
    pub fn clear_clip(&mut self) {
        self.clip = None;
    }

    /// Effective max x (exclusive), considering clip rect.
    #[inline]
    fn max_x(&self) -> usize {
        self.clip.map_or(self.width, |c| c.x1)
    }

    /// Effective max y (exclusive), considering clip rect.
    #[inline]
    fn max_y(&self) -> usize {
        self.clip.map_or(self.height, |c| c.y1)
    }

    /// Effective min x (inclusive), considering clip rect.
    #[inline]
    fn min_x(&self) -> usize {
        self.clip.map_or(0, |c| c.x0)
    }

    /// Effective min y (inclusive), considering clip rect.
    #[inline]
    fn min_y(&self) -> usize {
        self.clip.map_or(0, |c| c.y0)
    }

    #[inline]
    fn in_clip(&self, x: usize, y: usize) -> bool {
        x >= self.min_x() && x < self.max_x() && y >= self.min_y() && y < self.max_y()
    }

    /// Clear the entire buffer with a solid color (ignores the clip rect)
    #[inline]
    pub fn clear(&mut self, color: u32) {
        self.buffer.fill(color);
    }

    /// Fill a rectangle specified by pixel coordinates
    pub fn fill_rect_px(&mut self, x: usize, y: usize, w: usize, h: usize, color: u32) {
        let x0 = x.max(self.min_x());
        let y0 = y.max(self.min_y());
        let x1 = x.saturating_add(w).min(self.max_x());
        let y1 = y.saturating_add(h).min(self.max_y());
        if x0 >= x1 {
            return;
        }

        for py in y0..y1 {
            let row_start = py * self.width;
            self.buffer[row_start + x0..row_start + x1].fill(color);
        }
    }

    /// Draw a 1px outline whose edges lie on `x`, `y`, `x + w - 1`, `y + h - 1`
    pub fn stroke_rect_px(&mut self, x: usize, y: usize, w: usize, h: usize, color: u32) {
        if w == 0 || h == 0 {
            return;
        }
        // Top
        self.fill_rect_px(x, y, w, 1, color);
        // Bottom
        self.fill_rect_px(x, y + h - 1, w, 1, color);
        // Left
        self.fill_rect_px(x, y, 1, h, color);
        // Right
        self.fill_rect_px(x + w - 1, y, 1, h, color);
    }

    /// Draw a rectangle with a 1px border
    pub fn draw_bordered_rect(
        &mut self,
        x: usize,
        y: usize,
        w: usize,
        h: usize,
        fill_color: u32,
        border_color: u32,
    ) {
        self.fill_rect_px(x, y, w, h, fill_color);
        self.stroke_rect_px(x, y, w, h, border_color | 0xFF000000);
    }

    /// Draw a circle outline of the given stroke width.
    ///
    /// A pixel is painted when the distance from its center to `(cx, cy)`
    /// lies in `(radius - stroke, radius]`.
    pub fn stroke_circle(&mut self, cx: f32, cy: f32, radius: f32, stroke: f32, color: u32) {
        if radius <= 0.0 {
            return;
        }
        let inner = (radius - stroke).max(0.0);
        let x0 = ((cx - radius).floor().max(0.0) as usize).max(self.min_x());
        let y0 = ((cy - radius).floor().max(0.0) as usize).max(self.min_y());
        let x1 = ((cx + radius).ceil().max(0.0) as usize).min(self.max_x());
        let y1 = ((cy + radius).ceil().max(0.0) as usize).min(self.max_y());

        for py in y0..y1 {
            for px in x0..x1 {
                let dx = px as f32 + 0.5 - cx;
                let dy = py as f32 + 0.5 - cy;
                let dist = (dx * dx + dy * dy).sqrt();
                if dist > inner && dist <= radius {
                    self.buffer[py * self.width + px] = color;
                }
            }
        }
    }

    /// Get a single pixel (bounds-checked, returns 0 if out of bounds)
    #[inline]
    pub fn get_pixel(&self, x: usize, y: usize) -> u32 {
        if x < self.width && y < self.height {
            self.buffer[y * self.width + x]
        } else {
            0
        }
    }

    /// Blend a pixel with alpha in `[0, 1]`
    #[inline]
    fn blend_pixel(&mut self, x: usize, y: usize, color: u32, alpha: f32) {
        if self.in_clip(x, y) {
            let idx = y * self.width + x;
            self.buffer[idx] = blend_colors(self.buffer[idx], color, alpha);
        }
    }
}

/// Text rendering with a borrowed font and glyph cache
pub struct TextPainter<'a> {
    font: &'a Font,
    glyph_cache: &'a mut GlyphCache,
    font_size: f32,
    ascent: f32,
    line_height: usize,
}

impl<'a> TextPainter<'a> {
    pub fn new(font: &'a Font, glyph_cache: &'a mut GlyphCache, font_size: f32) -> Self {
        let (ascent, line_height) = match font.horizontal_line_metrics(font_size) {
            Some(metrics) => (metrics.ascent, metrics.new_line_size.ceil() as usize),
            None => (font_size, font_size.ceil() as usize),
        };
        Self {
            font,
            glyph_cache,
            font_size,
            ascent,
            line_height,
        }
    }

    /// Draw text with its top-left corner at `(x, y)`
    pub fn draw(&mut self, frame: &mut Frame, x: usize, y: usize, text: &str, color: u32) {
        let mut current_x = x as f32;
        let baseline = y as f32 + self.ascent;

        for ch in text.chars() {
            let key = (ch, self.font_size.to_bits());
            let (metrics, bitmap) = self
                .glyph_cache
                .entry(key)
                .or_insert_with(|| self.font.rasterize(ch, self.font_size));

            let glyph_top = baseline - metrics.height as f32 - metrics.ymin as f32;

            for bitmap_y in 0..metrics.height {
                for bitmap_x in 0..metrics.width {
                    let alpha = bitmap[bitmap_y * metrics.width + bitmap_x];
                    if alpha == 0 {
                        continue;
                    }
                    let px = current_x as isize + bitmap_x as isize + metrics.xmin as isize;
                    let py = (glyph_top + bitmap_y as f32) as isize;
                    if px >= 0 && py >= 0 {
                        frame.blend_pixel(px as usize, py as usize, color, alpha as f32 / 255.0);
                    }
                }
            }

            current_x += metrics.advance_width;
        }
    }

    /// Measure text width in pixels
    pub fn measure_width(&mut self, text: &str) -> f32 {
        let mut width = 0.0;
        for ch in text.chars() {
            let key = (ch, self.font_size.to_bits());
            let (metrics, _) = self
                .glyph_cache
                .entry(key)
                .or_insert_with(|| self.font.rasterize(ch, self.font_size));
            width += metrics.advance_width;
        }
        width
    }

    /// Draw text centered on `(cx, cy)`
    pub fn draw_centered(&mut self, frame: &mut Frame, cx: usize, cy: usize, text: &str, color: u32) {
        let text_w = self.measure_width(text).round() as usize;
        let x = cx.saturating_sub(text_w / 2);
        let y = cy.saturating_sub(self.line_height / 2);
        self.draw(frame, x, y, text, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: u32 = 0xFFFF0000;

    #[test]
    fn test_fill_rect_is_clipped() {
        let mut buf = vec![0u32; 10 * 10];
        let mut frame = Frame::new(&mut buf, 10, 10);
        frame.fill_rect_px(8, 8, 5, 5, RED);
        assert_eq!(frame.get_pixel(9, 9), RED);
        assert_eq!(frame.get_pixel(7, 7), 0);
    }

    #[test]
    fn test_stroke_rect_leaves_interior() {
        let mut buf = vec![0u32; 10 * 10];
        let mut frame = Frame::new(&mut buf, 10, 10);
        frame.stroke_rect_px(0, 0, 5, 5, RED);
        assert_eq!(frame.get_pixel(0, 0), RED);
        assert_eq!(frame.get_pixel(4, 4), RED);
        assert_eq!(frame.get_pixel(4, 0), RED);
        assert_eq!(frame.get_pixel(2, 2), 0);
        assert_eq!(frame.get_pixel(5, 5), 0);
    }

    #[test]
    fn test_stroke_circle_is_a_ring() {
        let mut buf = vec![0u32; 40 * 40];
        let mut frame = Frame::new(&mut buf, 40, 40);
        frame.stroke_circle(20.0, 20.0, 10.0, 2.0, RED);
        // Center untouched
        assert_eq!(frame.get_pixel(20, 20), 0);
        // Pixel centered 9.5 to the right of center lies on the ring
        assert_eq!(frame.get_pixel(29, 20), RED);
        // Outside the radius
        assert_eq!(frame.get_pixel(31, 20), 0);
    }

    #[test]
    fn test_clip_constrains_drawing() {
        let mut buf = vec![0u32; 20 * 20];
        let mut frame = Frame::new(&mut buf, 20, 20);
        frame.set_clip(Rect::new(0, 0, 20, 10));

        frame.stroke_rect_px(2, 2, 15, 15, RED);
        assert_eq!(frame.get_pixel(2, 9), RED);
        assert_eq!(frame.get_pixel(2, 10), 0);
        assert_eq!(frame.get_pixel(2, 16), 0);

        frame.stroke_circle(10.0, 10.0, 8.0, 2.0, RED);
        assert_eq!(frame.get_pixel(10, 17), 0);
        assert_eq!(frame.get_pixel(10, 2), RED);

        frame.clear_clip();
        frame.fill_rect_px(0, 18, 1, 1, RED);
        assert_eq!(frame.get_pixel(0, 18), RED);
    }

    #[test]
    fn test_clip_outside_frame_draws_nothing() {
        let mut buf = vec![0u32; 10 * 10];
        let mut frame = Frame::new(&mut buf, 10, 10);
        frame.set_clip(Rect::new(20, 20, 5, 5));
        frame.fill_rect_px(0, 0, 10, 10, RED);
        assert!(buf.iter().all(|&p| p == 0));
    }

    #[test]
    fn test_short_buffer_shrinks_height() {
        let mut buf = vec![0u32; 10 * 4];
        let frame = Frame::new(&mut buf, 10, 10);
        assert_eq!(frame.height(), 4);
    }

    #[test]
    fn test_blend_colors_extremes() {
        assert_eq!(blend_colors(0xFF000000, 0xFFFFFFFF, 1.0), 0xFFFFFFFF);
        assert_eq!(blend_colors(0xFF000000, 0xFFFFFFFF, 0.0), 0xFF000000);
    }
}
