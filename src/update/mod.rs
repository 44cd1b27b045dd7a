//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod app;
mod grid;
mod ui;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::AppModel;

#[cfg(debug_assertions)]
use crate::tracing::SelectionSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use app::update_app;
pub use grid::update_grid;
pub use ui::update_ui;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

fn update_inner(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Grid(m) => update_grid(model, m),
        Msg::Ui(m) => update_ui(model, m),
        Msg::App(m) => update_app(model, m),
    }
}

#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    use crate::messages::UiMsg;

    // Pointer motion arrives on every mouse move
    let is_noisy = matches!(&msg, Msg::Ui(UiMsg::PointerMoved { .. }));

    let msg_name = format!("{:?}", msg);
    let _span = if is_noisy {
        None
    } else {
        debug!(target: "message", msg = %msg_name, "processing");
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    let before = SelectionSnapshot::from_selection(model.selector.selection());
    let result = update_inner(model, msg);
    let after = SelectionSnapshot::from_selection(model.selector.selection());

    if let Some(diff) = before.diff(&after) {
        debug!(target: "selection", %diff, "state changed");
    }

    result
}
