//! Application-level messages

use crate::commands::Cmd;
use crate::messages::AppMsg;
use crate::model::{AppModel, StatusMessage};

pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::ImageSaved(Ok(path)) => {
            println!("Password image saved as '{}'.", path.display());
            tracing::info!("Saved password image to {}", path.display());
            model.ui.set_status(StatusMessage::info(format!(
                "Password: {} | saved '{}'",
                model.selector.selection().to_password(),
                path.display()
            )));
            Some(Cmd::Redraw)
        }
        AppMsg::ImageSaved(Err(e)) => {
            tracing::error!("{}", e);
            eprintln!("{}", e);
            model.ui.set_status(StatusMessage::error(e));
            Some(Cmd::Redraw)
        }
        AppMsg::Quit => Some(Cmd::Quit),
    }
}
