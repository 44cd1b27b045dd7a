//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::path::Path;

use gridpass::config::AppConfig;
use gridpass::grid::Cell;
use gridpass::messages::{GridMsg, Msg, UiMsg};
use gridpass::model::AppModel;
use gridpass::update::update;

/// Default 400×400, 7×7 model
pub fn test_model() -> AppModel {
    AppModel::new(AppConfig::default())
}

/// Model that writes its image into `dir`
pub fn test_model_in(dir: &Path) -> AppModel {
    AppModel::new(AppConfig {
        output_path: dir.join("graphical_password.png"),
        ..AppConfig::default()
    })
}

/// Toggle each cell in order through `update`
pub fn toggle_all(model: &mut AppModel, cells: &[(u32, u32)]) {
    for &(row, col) in cells {
        update(model, Msg::Grid(GridMsg::ToggleCell(Cell::new(row, col))));
    }
}

/// Move the pointer to `(x, y)` and click
pub fn click_at(model: &mut AppModel, x: f64, y: f64) {
    update(model, Msg::Ui(UiMsg::PointerMoved { x, y }));
    update(model, Msg::Ui(UiMsg::PointerPressed));
    update(model, Msg::Ui(UiMsg::PointerReleased));
}

/// Click the middle of the "Generate Password" button
pub fn click_button(model: &mut AppModel) {
    let (x, y) = model.layout.button.center();
    click_at(model, x as f64, y as f64);
}

pub fn selected(model: &AppModel) -> Vec<(u32, u32)> {
    model
        .selector
        .selection()
        .iter()
        .map(|c| (c.row, c.col))
        .collect()
}
