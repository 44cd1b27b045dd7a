//! Button hover / press state through pointer messages

mod common;

use common::test_model;
use gridpass::commands::Cmd;
use gridpass::messages::{AppMsg, Msg, UiMsg};
use gridpass::update::update;
use gridpass::view::ButtonState;

#[test]
fn test_hover_and_leave() {
    let mut model = test_model();
    let (bx, by) = model.layout.button.center();

    let cmd = update(
        &mut model,
        Msg::Ui(UiMsg::PointerMoved {
            x: bx as f64,
            y: by as f64,
        }),
    );
    assert_eq!(cmd, Some(Cmd::Redraw));
    assert_eq!(model.ui.button_state, ButtonState::Hovered);

    // Moving within the button does not redraw again
    let cmd = update(
        &mut model,
        Msg::Ui(UiMsg::PointerMoved {
            x: bx as f64 + 1.0,
            y: by as f64,
        }),
    );
    assert_eq!(cmd, None);

    update(&mut model, Msg::Ui(UiMsg::PointerLeft));
    assert_eq!(model.ui.button_state, ButtonState::Normal);
    assert!(model.ui.pointer.is_none());
}

#[test]
fn test_press_then_drag_off_cancels() {
    let mut model = test_model();
    let (bx, by) = model.layout.button.center();

    update(
        &mut model,
        Msg::Ui(UiMsg::PointerMoved {
            x: bx as f64,
            y: by as f64,
        }),
    );
    update(&mut model, Msg::Ui(UiMsg::PointerPressed));
    assert_eq!(model.ui.button_state, ButtonState::Pressed);

    update(&mut model, Msg::Ui(UiMsg::PointerMoved { x: 5.0, y: 5.0 }));
    assert_eq!(model.ui.button_state, ButtonState::Normal);

    let cmd = update(&mut model, Msg::Ui(UiMsg::PointerReleased));
    assert_eq!(cmd, Some(Cmd::Redraw));
    // No password attempt happened
    assert!(model.ui.status.is_none());
}

#[test]
fn test_release_without_press_is_ignored() {
    let mut model = test_model();
    assert_eq!(update(&mut model, Msg::Ui(UiMsg::PointerReleased)), None);
}

#[test]
fn test_press_without_pointer_position_is_ignored() {
    let mut model = test_model();
    assert_eq!(update(&mut model, Msg::Ui(UiMsg::PointerPressed)), None);
}

#[test]
fn test_quit_message() {
    let mut model = test_model();
    assert_eq!(update(&mut model, Msg::App(AppMsg::Quit)), Some(Cmd::Quit));
}
