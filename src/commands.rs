//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub enum Cmd {
    /// No side effect
    None,
    /// Repaint the window
    Redraw,
    /// Render the current selection and write it to `path`
    SaveImage { path: PathBuf },
    /// Close the window and leave the event loop
    Quit,
    /// Several commands in order
    Batch(Vec<Cmd>),
}

impl Cmd {
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::Redraw => true,
            Cmd::Batch(cmds) => cmds.iter().any(Cmd::needs_redraw),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_needs_redraw() {
        assert!(Cmd::Redraw.needs_redraw());
        assert!(!Cmd::None.needs_redraw());
        assert!(!Cmd::SaveImage {
            path: PathBuf::from("x.png")
        }
        .needs_redraw());
        assert!(Cmd::Batch(vec![Cmd::None, Cmd::Redraw]).needs_redraw());
    }
}
