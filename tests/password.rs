//! Password generation and image export

mod common;

use std::path::PathBuf;

use common::{click_button, test_model, test_model_in, toggle_all};
use gridpass::commands::Cmd;
use gridpass::error::GridError;
use gridpass::export::{render_and_save, render_image};
use gridpass::grid::Cell;
use gridpass::messages::{AppMsg, GridMsg, Msg};
use gridpass::model::StatusKind;
use gridpass::update::update;

#[test]
fn test_password_in_selection_order() {
    let mut model = test_model();
    toggle_all(&mut model, &[(1, 2), (0, 0)]);
    assert_eq!(model.selector.generate_password().unwrap(), "1,2-0,0");
}

#[test]
fn test_single_cell_password() {
    let mut model = test_model();
    toggle_all(&mut model, &[(6, 6)]);
    assert_eq!(model.selector.generate_password().unwrap(), "6,6");
}

#[test]
fn test_empty_selection_fails_without_save() {
    let mut model = test_model();
    let cmd = update(&mut model, Msg::Grid(GridMsg::GeneratePassword));

    assert_eq!(cmd, Some(Cmd::Redraw));
    assert!(matches!(
        model.selector.generate_password(),
        Err(GridError::EmptySelection)
    ));
    let status = model.ui.status.as_ref().unwrap();
    assert_eq!(status.kind, StatusKind::Error);
    assert_eq!(status.text, "Please select at least one point.");
}

#[test]
fn test_generate_requests_save_to_configured_path() {
    let tmp = tempfile::tempdir().unwrap();
    let mut model = test_model_in(tmp.path());
    toggle_all(&mut model, &[(1, 2), (0, 0)]);

    let cmd = update(&mut model, Msg::Grid(GridMsg::GeneratePassword));
    assert_eq!(
        cmd,
        Some(Cmd::Batch(vec![
            Cmd::Redraw,
            Cmd::SaveImage {
                path: tmp.path().join("graphical_password.png")
            },
        ]))
    );
    assert_eq!(
        model.ui.status.as_ref().unwrap().text,
        "Password: 1,2-0,0"
    );
}

#[test]
fn test_button_click_generates_password() {
    let mut model = test_model();
    toggle_all(&mut model, &[(3, 4)]);
    click_button(&mut model);

    let status = model.ui.status.as_ref().unwrap();
    assert_eq!(status.kind, StatusKind::Info);
    assert_eq!(status.text, "Password: 3,4");
}

#[test]
fn test_render_image_has_canvas_dimensions() {
    for (w, h, n, cells) in [
        (400, 400, 7, vec![]),
        (400, 400, 7, vec![(0, 0), (6, 6), (3, 2)]),
        (300, 200, 5, vec![(4, 0)]),
    ] {
        let mut model = gridpass::AppModel::new(gridpass::AppConfig {
            canvas_width: w,
            canvas_height: h,
            grid_size: n,
            ..Default::default()
        });
        toggle_all(&mut model, &cells);
        let img = render_image(&model.selector, &model.theme);
        assert_eq!(img.dimensions(), (w, h));
    }
}

#[test]
fn test_render_and_save_writes_png() {
    let tmp = tempfile::tempdir().unwrap();
    let mut model = test_model();
    toggle_all(&mut model, &[(1, 0)]);

    let path = tmp.path().join("pw.png");
    render_and_save(&model.selector, &model.theme, &path).unwrap();

    let img = image::open(&path).unwrap().to_rgb8();
    assert_eq!(img.dimensions(), (400, 400));
    assert_eq!(img.get_pixel(85, 11).0, [255, 0, 0]);
    assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0]);
}

#[test]
fn test_render_and_save_empty_selection_still_writes() {
    let tmp = tempfile::tempdir().unwrap();
    let model = test_model();
    let path = tmp.path().join("empty.png");
    render_and_save(&model.selector, &model.theme, &path).unwrap();
    assert_eq!(image::open(&path).unwrap().width(), 400);
}

#[test]
fn test_unwritable_path_is_image_write_error() {
    let tmp = tempfile::tempdir().unwrap();
    let model = test_model();
    let path = tmp.path().join("missing-dir").join("pw.png");

    let err = render_and_save(&model.selector, &model.theme, &path).unwrap_err();
    match err {
        GridError::ImageWrite { path: p, .. } => assert_eq!(p, path),
        other => panic!("expected ImageWrite, got {:?}", other),
    }
}

#[test]
fn test_save_failure_is_reported_and_ui_survives() {
    let mut model = test_model();
    toggle_all(&mut model, &[(0, 0)]);

    let cmd = update(
        &mut model,
        Msg::App(AppMsg::ImageSaved(Err("disk full".to_string()))),
    );
    assert_eq!(cmd, Some(Cmd::Redraw));
    let status = model.ui.status.as_ref().unwrap();
    assert_eq!(status.kind, StatusKind::Error);
    assert_eq!(status.text, "disk full");

    // Still interactive
    update(&mut model, Msg::Grid(GridMsg::ToggleCell(Cell::new(1, 1))));
    assert_eq!(model.selector.selection().len(), 2);
}

#[test]
fn test_save_success_updates_status() {
    let mut model = test_model();
    toggle_all(&mut model, &[(2, 5)]);
    update(
        &mut model,
        Msg::App(AppMsg::ImageSaved(Ok(PathBuf::from("graphical_password.png")))),
    );
    assert_eq!(
        model.ui.status.as_ref().unwrap().text,
        "Password: 2,5 | saved 'graphical_password.png'"
    );
}
