//! Softbuffer surface and font state for the window

use std::num::NonZeroU32;
use std::rc::Rc;

use anyhow::Result;
use fontdue::Font;
use softbuffer::{Context, Surface};
use winit::window::Window;

use gridpass::model::AppModel;
use gridpass::view::{self, Frame, GlyphCache, TextPainter};

/// The canvas is laid out in physical pixels, so the font size is too
const FONT_SIZE: f32 = 12.0;

pub struct Renderer {
    window: Rc<Window>,
    surface: Surface<Rc<Window>, Rc<Window>>,
    font: Option<Font>,
    glyph_cache: GlyphCache,
    font_size: f32,
}

impl Renderer {
    pub fn new(window: Rc<Window>, context: &Context<Rc<Window>>, font: Option<Font>) -> Result<Self> {
        let surface = Surface::new(context, Rc::clone(&window))
            .map_err(|e| anyhow::anyhow!("Failed to create surface: {}", e))?;

        Ok(Self {
            window,
            surface,
            font,
            glyph_cache: GlyphCache::new(),
            font_size: FONT_SIZE,
        })
    }

    /// Full repaint of the window from the model
    pub fn render(&mut self, model: &AppModel) -> Result<()> {
        let size = self.window.inner_size();
        let (Some(width), Some(height)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
        else {
            return Ok(());
        };

        self.surface
            .resize(width, height)
            .map_err(|e| anyhow::anyhow!("Failed to resize surface: {}", e))?;

        let mut buffer = self
            .surface
            .buffer_mut()
            .map_err(|e| anyhow::anyhow!("Failed to get buffer: {}", e))?;

        let mut frame = Frame::new(&mut buffer, size.width as usize, size.height as usize);
        let mut painter = self
            .font
            .as_ref()
            .map(|font| TextPainter::new(font, &mut self.glyph_cache, self.font_size));
        view::render_app(&mut frame, model, painter.as_mut());

        buffer
            .present()
            .map_err(|e| anyhow::anyhow!("Failed to present buffer: {}", e))?;
        Ok(())
    }
}
