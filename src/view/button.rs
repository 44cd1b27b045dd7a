//! Button rendering primitives
//!
//! No widget tree or stored state. Callers determine visual state
//! from the model and pass it to the render function.

use crate::theme::Theme;

use super::frame::{Frame, TextPainter};
use super::geometry::Rect;

/// Visual state of a button, determined by the caller from UI interaction state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonState {
    #[default]
    Normal,
    Hovered,
    /// Pointer went down on the button and has not been released yet
    Pressed,
}

/// Render a button with centered text label
///
/// Without a painter only the bordered body is drawn.
pub fn render_button(
    frame: &mut Frame,
    painter: Option<&mut TextPainter>,
    theme: &Theme,
    rect: Rect,
    label: &str,
    state: ButtonState,
) {
    let bg = match state {
        ButtonState::Normal => theme.button_background,
        ButtonState::Hovered => theme.button_hover,
        ButtonState::Pressed => theme.button_pressed,
    };

    frame.draw_bordered_rect(
        rect.x,
        rect.y,
        rect.width,
        rect.height,
        bg.to_argb_u32(),
        theme.button_border.to_argb_u32(),
    );

    if let Some(painter) = painter {
        let (cx, cy) = rect.center();
        painter.draw_centered(frame, cx, cy, label, theme.button_foreground.to_argb_u32());
    }
}
