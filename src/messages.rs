//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use std::path::PathBuf;

use crate::grid::Cell;

/// Grid selection and password messages
#[derive(Debug, Clone, PartialEq)]
pub enum GridMsg {
    /// Primary click on the canvas, in canvas pixels
    CanvasClicked { x: u32, y: u32 },
    /// Toggle a cell directly
    ToggleCell(Cell),
    /// Build the password and save the image
    GeneratePassword,
}

/// Pointer messages, in window pixels
#[derive(Debug, Clone, PartialEq)]
pub enum UiMsg {
    PointerMoved { x: f64, y: f64 },
    PointerPressed,
    PointerReleased,
    PointerLeft,
}

/// Application lifecycle messages
#[derive(Debug, Clone, PartialEq)]
pub enum AppMsg {
    /// Result of writing the password image
    ImageSaved(Result<PathBuf, String>),
    Quit,
}

/// Top-level message
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Grid(GridMsg),
    Ui(UiMsg),
    App(AppMsg),
}
