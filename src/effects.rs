//! Command execution
//!
//! Runs the side effects an update asks for and feeds their results back
//! through `update`. The runtime only has to repaint and exit.

use std::path::PathBuf;

use crate::commands::Cmd;
use crate::export::render_and_save;
use crate::messages::{AppMsg, Msg};
use crate::model::AppModel;
use crate::update::update;

/// What the window has to do after a command ran
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Effects {
    pub redraw: bool,
    pub quit: bool,
}

impl Effects {
    fn merge(self, other: Effects) -> Effects {
        Effects {
            redraw: self.redraw || other.redraw,
            quit: self.quit || other.quit,
        }
    }
}

/// Execute `cmd` and any follow-up commands its results produce
pub fn execute(model: &mut AppModel, cmd: Cmd) -> Effects {
    match cmd {
        Cmd::None => Effects::default(),
        Cmd::Redraw => Effects {
            redraw: true,
            quit: false,
        },
        Cmd::SaveImage { path } => {
            // Synchronous write on the event thread
            let result = save_image(model, path);
            match update(model, Msg::App(AppMsg::ImageSaved(result))) {
                Some(next) => execute(model, next),
                None => Effects::default(),
            }
        }
        Cmd::Quit => Effects {
            redraw: false,
            quit: true,
        },
        Cmd::Batch(cmds) => cmds
            .into_iter()
            .fold(Effects::default(), |acc, cmd| acc.merge(execute(model, cmd))),
    }
}

fn save_image(model: &AppModel, path: PathBuf) -> Result<PathBuf, String> {
    tracing::debug!(path = %path.display(), "saving password image");
    render_and_save(&model.selector, &model.theme, &path)
        .map(|()| path)
        .map_err(|e| e.to_string())
}
