//! Whole-window rendering: canvas, button bar and status line

mod common;

use common::toggle_all;
use gridpass::config::AppConfig;
use gridpass::model::AppModel;
use gridpass::view::{render_app, Frame};

fn render_window(model: &AppModel) -> Vec<u32> {
    let (w, h) = model.window_size();
    let mut buf = vec![0u32; (w * h) as usize];
    let mut frame = Frame::new(&mut buf, w as usize, h as usize);
    render_app(&mut frame, model, None);
    buf
}

#[test]
fn test_short_canvas_keeps_grid_out_of_button_bar() {
    // Constructed directly so the short height reaches the renderer
    let mut model = AppModel::new(AppConfig {
        canvas_width: 400,
        canvas_height: 200,
        grid_size: 7,
        ..AppConfig::default()
    });
    toggle_all(&mut model, &[(1, 5), (0, 6)]);
    let buf = render_window(&model);
    let width = model.layout.width;
    let at = |x: usize, y: usize| buf[y * width + x];
    let background = model.theme.background.to_argb_u32();

    assert_eq!(model.window_size(), (400, 274));
    assert_eq!(at(57, 199), model.theme.grid_line.to_argb_u32());
    // Below the canvas, left of the button
    assert_eq!(at(57, model.layout.button.y + 5), background);
    // Status line
    assert_eq!(at(57, model.layout.status.y + 5), background);
    // Marker of cell (0,6) would sit at y 342..399
    assert_eq!(at(28, model.layout.status.y + 10), background);
}

#[test]
fn test_default_window_draws_grid_and_markers() {
    let mut model = AppModel::new(AppConfig::default());
    toggle_all(&mut model, &[(1, 0)]);
    let buf = render_window(&model);
    let at = |x: usize, y: usize| buf[y * 400 + x];

    assert_eq!(at(57, 30), model.theme.grid_line.to_argb_u32());
    assert_eq!(at(85, 11), model.theme.marker.to_argb_u32());
    assert_eq!(at(57, model.layout.status.y + 5), model.theme.background.to_argb_u32());
}
