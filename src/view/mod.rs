//! Pure rendering into pixel buffers
//!
//! Nothing here touches the window system. The runtime hands a softbuffer
//! slice to [`render_app`]; the exporter hands an offscreen buffer to
//! [`canvas::render_canvas`].

pub mod button;
pub mod canvas;
pub mod font;
pub mod frame;
pub mod geometry;

pub use button::ButtonState;
pub use frame::{Frame, GlyphCache, TextPainter};
pub use geometry::{Hit, Layout, Rect};

use crate::model::{AppModel, StatusKind};

pub const BUTTON_LABEL: &str = "Generate Password";

/// Paint the whole window: canvas, button and status line
pub fn render_app(frame: &mut Frame, model: &AppModel, mut painter: Option<&mut TextPainter>) {
    let theme = &model.theme;
    frame.clear(theme.background.to_argb_u32());

    canvas::render_canvas(
        frame,
        model.selector.grid(),
        model.selector.selection(),
        theme,
        painter.as_deref_mut(),
    );

    button::render_button(
        frame,
        painter.as_deref_mut(),
        theme,
        model.layout.button,
        BUTTON_LABEL,
        model.ui.button_state,
    );

    if let (Some(painter), Some(status)) = (painter, &model.ui.status) {
        let color = match status.kind {
            StatusKind::Info => theme.status_foreground,
            StatusKind::Error => theme.status_error,
        };
        let (cx, cy) = model.layout.status.center();
        painter.draw_centered(frame, cx, cy, &status.text, color.to_argb_u32());
    }
}
