//! Paths command handler

use anyhow::Result;

use objview::presentation::InspectArgs;

use super::{GlobalArgs, Session};
use crate::ui::json::events::ExpandedPathsEvent;

pub fn cmd_paths(args: &InspectArgs, global: GlobalArgs) -> Result<()> {
    let session = Session::open(args, global)?;
    let mut view = session.tree_view();
    view.flush();

    let state = view.expanded_paths();
    if session.ui.json {
        crate::ui::json::emit_event(&ExpandedPathsEvent::new("paths", state))?;
        return Ok(());
    }

    for (path, _) in state.iter().filter(|(_, expanded)| **expanded) {
        println!("{}", path);
    }
    Ok(())
}
