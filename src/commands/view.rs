//! View command handler
//!
//! Opens the interactive inspector when attached to a terminal, otherwise
//! prints the pre-expanded tree the way `print` does.

use anyhow::Result;

use objview::presentation::InspectArgs;
use objview::ExpandedPaths;

use super::{GlobalArgs, Session};
use crate::ui::json::events::ExpandedPathsEvent;
use crate::ui::widgets::inspector::{run_interactive, InspectorMenu};

pub fn cmd_view(args: &InspectArgs, global: GlobalArgs) -> Result<()> {
    let session = Session::open(args, global)?;

    if !session.ui.interactive() {
        tracing::info!("not attached to a terminal, printing instead");
        return super::print::print_session(&session);
    }

    let view = session
        .tree_view()
        .with_on_expand(Box::new(|path: &str, state: &ExpandedPaths| {
            let expanded = state.get(path).copied().unwrap_or(false);
            tracing::debug!(path, expanded, "node toggled");
        }));

    let title = match args.name.as_deref() {
        Some(name) => format!("{} ({})", name, args.file.display()),
        None => args.file.display().to_string(),
    };

    let styles = view.styles().clone();
    let mut menu = InspectorMenu::new(view);
    run_interactive(&mut menu, &title, &styles, session.ui.color)?;

    if session.ui.json {
        let view = menu.into_view();
        crate::ui::json::emit_event(&ExpandedPathsEvent::new("view", view.expanded_paths()))?;
    }
    Ok(())
}
