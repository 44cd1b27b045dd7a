//! Selection toggling and password generation

use tracing::{debug, info};

use crate::commands::Cmd;
use crate::messages::GridMsg;
use crate::model::{AppModel, StatusMessage};

pub fn update_grid(model: &mut AppModel, msg: GridMsg) -> Option<Cmd> {
    match msg {
        GridMsg::CanvasClicked { x, y } => {
            let (cell, toggle) = model.selector.click(x, y)?;
            debug!(target: "selection", %cell, ?toggle, "cell toggled");
            Some(Cmd::Redraw)
        }

        GridMsg::ToggleCell(cell) => {
            let toggle = model.selector.toggle_cell(cell)?;
            debug!(target: "selection", %cell, ?toggle, "cell toggled");
            Some(Cmd::Redraw)
        }

        GridMsg::GeneratePassword => match model.selector.generate_password() {
            Ok(password) => {
                println!("Generated Password:  {}", password);
                info!(cells = model.selector.selection().len(), "password generated");
                model
                    .ui
                    .set_status(StatusMessage::info(format!("Password: {}", password)));
                Some(Cmd::Batch(vec![
                    Cmd::Redraw,
                    Cmd::SaveImage {
                        path: model.config.output_path.clone(),
                    },
                ]))
            }
            Err(e) => {
                println!("{}", e);
                model.ui.set_status(StatusMessage::error(e.to_string()));
                Some(Cmd::Redraw)
            }
        },
    }
}

