//! Command handlers
//!
//! Every command loads configuration, merges the CLI arguments over it, loads
//! the document and builds a `TreeView`; they differ only in what they do with
//! the view.

pub mod paths;
pub mod print;
pub mod view;

use anyhow::{Context, Result};

use objview::config::Config;
use objview::error::ObjviewError;
use objview::expansion::path::MAX_TEMPLATE_SEGMENTS;
use objview::loader::{self, Document};
use objview::presentation::{ColorWhen, InspectArgs};
use objview::{InspectorOptions, KeySort, TreeView};

use crate::ui::context::UiContext;
use crate::ui::labels::InspectorLabels;
use crate::ui::output::print_config_warnings;
use crate::ui::theme::tree_styles;

/// Global flags shared by all commands
#[derive(Debug, Clone, Copy)]
pub struct GlobalArgs {
    pub json: bool,
    pub color: Option<ColorWhen>,
    pub ascii: bool,
}

/// Everything a command needs before it builds its view.
pub struct Session {
    pub document: Document,
    pub options: InspectorOptions,
    pub ui: UiContext,
}

impl Session {
    pub fn open(args: &InspectArgs, global: GlobalArgs) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let (config, warnings) = Config::load_layered(&cwd)?;
        let ui = UiContext::new(global.json, global.color, global.ascii, &config);
        if !global.json {
            print_config_warnings(&warnings, ui.unicode, ui.color);
        }

        let options = merge_options(&config, args)?;
        let document = loader::load(&args.file, args.format)
            .with_context(|| format!("failed to load {}", args.file.display()))?;

        Ok(Self {
            document,
            options,
            ui,
        })
    }

    /// Build the view with the default labels and the themed styles.
    pub fn tree_view(&self) -> TreeView<'_> {
        TreeView::from_options(&self.document.heap, self.document.root.clone(), &self.options)
            .with_renderer(InspectorLabels::new(self.ui.unicode))
            .with_styles(tree_styles(self.ui.unicode, self.ui.color))
    }
}

/// CLI flags win over configuration.
pub fn merge_options(
    config: &Config,
    args: &InspectArgs,
) -> Result<InspectorOptions, ObjviewError> {
    let mut options = config.inspector_options();

    if let Some(level) = args.expand_level {
        if level > MAX_TEMPLATE_SEGMENTS {
            return Err(ObjviewError::InvalidExpandLevel {
                value: level,
                max: MAX_TEMPLATE_SEGMENTS,
            });
        }
        options.expand_level = level;
    }
    if !args.expand_paths.is_empty() {
        options.expand_paths = args.expand_paths.clone();
    }
    if args.show_nonenumerable {
        options.show_non_enumerable = true;
    }
    if args.sort_keys {
        options.sort_object_keys = KeySort::Alphabetical;
    }
    options.name = args.name.clone();

    tracing::debug!(?options, "resolved inspector options");
    Ok(options)
}
