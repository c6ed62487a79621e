//! Print command handler

use anyhow::Result;

use objview::presentation::InspectArgs;

use super::{GlobalArgs, Session};
use crate::ui::json::events::NodeEvent;
use crate::ui::widgets::inspector::render_tree;

pub fn cmd_print(args: &InspectArgs, global: GlobalArgs) -> Result<()> {
    let session = Session::open(args, global)?;
    print_session(&session)
}

/// Render an opened session once; shared with the non-interactive `view`.
pub(super) fn print_session(session: &Session) -> Result<()> {
    let mut view = session.tree_view();
    let nodes = view.render();
    tracing::info!(nodes = nodes.len(), "rendered tree");

    if session.ui.json {
        for node in &nodes {
            crate::ui::json::emit_event(&NodeEvent::new(node))?;
        }
        return Ok(());
    }

    print!("{}", render_tree(&nodes, view.styles(), session.ui.color));
    Ok(())
}
