//! Pointer handling: hit-test, button visuals and canvas clicks

use crate::commands::Cmd;
use crate::messages::{GridMsg, UiMsg};
use crate::model::AppModel;
use crate::view::{ButtonState, Hit};

use super::grid::update_grid;

pub fn update_ui(model: &mut AppModel, msg: UiMsg) -> Option<Cmd> {
    match msg {
        UiMsg::PointerMoved { x, y } => {
            model.ui.pointer = Some((x, y));
            let over_button = model.layout.button.contains(x, y);
            let state = match (over_button, model.ui.button_armed) {
                (true, true) => ButtonState::Pressed,
                (true, false) => ButtonState::Hovered,
                (false, _) => ButtonState::Normal,
            };
            set_button_state(model, state)
        }

        UiMsg::PointerPressed => {
            let (x, y) = model.ui.pointer?;
            match model.layout.hit_test(x, y) {
                Hit::Canvas { x, y } => update_grid(model, GridMsg::CanvasClicked { x, y }),
                Hit::Button => {
                    model.ui.button_armed = true;
                    model.ui.button_state = ButtonState::Pressed;
                    Some(Cmd::Redraw)
                }
                Hit::None => None,
            }
        }

        UiMsg::PointerReleased => {
            if !model.ui.button_armed {
                return None;
            }
            model.ui.button_armed = false;

            let over_button = model
                .ui
                .pointer
                .is_some_and(|(x, y)| model.layout.button.contains(x, y));
            if over_button {
                model.ui.button_state = ButtonState::Hovered;
                let cmd = update_grid(model, GridMsg::GeneratePassword);
                Some(Cmd::Batch(vec![Cmd::Redraw, cmd.unwrap_or(Cmd::None)]))
            } else {
                model.ui.button_state = ButtonState::Normal;
                Some(Cmd::Redraw)
            }
        }

        UiMsg::PointerLeft => {
            model.ui.pointer = None;
            model.ui.button_armed = false;
            set_button_state(model, ButtonState::Normal)
        }
    }
}

/// Redraw only when the visual state actually changes
fn set_button_state(model: &mut AppModel, state: ButtonState) -> Option<Cmd> {
    if model.ui.button_state == state {
        None
    } else {
        model.ui.button_state = state;
        Some(Cmd::Redraw)
    }
}
