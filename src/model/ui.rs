//! Transient UI state: button visuals and the status line

use crate::view::ButtonState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

/// Last user-facing message, shown under the button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Info,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Error,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub button_state: ButtonState,
    /// Pointer went down on the button; a release over it fires
    pub button_armed: bool,
    pub status: Option<StatusMessage>,
    /// Last pointer position in window pixels
    pub pointer: Option<(f64, f64)>,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_status(&mut self, status: StatusMessage) {
        self.status = Some(status);
    }
}
