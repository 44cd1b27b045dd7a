//! Keyboard shortcuts
//!
//! `Enter` generates the password and `Escape` quits. Auto-repeat and key
//! releases are ignored, so holding `Enter` saves the image once.

use winit::event::ElementState;
use winit::keyboard::{Key, NamedKey};

use crate::commands::Cmd;
use crate::messages::{AppMsg, GridMsg, Msg};
use crate::model::AppModel;
use crate::update::update;

/// Message bound to a key event, if any
pub fn msg_for_key(key: &Key, state: ElementState, repeat: bool) -> Option<Msg> {
    if state != ElementState::Pressed || repeat {
        return None;
    }
    match key {
        Key::Named(NamedKey::Enter) => Some(Msg::Grid(GridMsg::GeneratePassword)),
        Key::Named(NamedKey::Escape) => Some(Msg::App(AppMsg::Quit)),
        _ => None,
    }
}

pub fn handle_key(
    model: &mut AppModel,
    key: &Key,
    state: ElementState,
    repeat: bool,
) -> Option<Cmd> {
    msg_for_key(key, state, repeat).and_then(|msg| update(model, msg))
}
