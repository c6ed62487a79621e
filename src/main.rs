//! objview CLI - inspect nested data as an expandable tree
//!
//! Usage: objview <COMMAND> <FILE>
//!
//! Commands:
//!   view   Browse the document interactively
//!   print  Print the pre-expanded tree once
//!   paths  Print the initially expanded paths

mod commands;
mod ui;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use objview::presentation::{Cli, ColorWhen, Commands};

use commands::GlobalArgs;
use ui::json::events::ErrorEvent;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let global = GlobalArgs {
        json: cli.json,
        color: cli.color,
        ascii: cli.ascii,
    };

    let (name, result) = match &cli.command {
        Commands::View(args) => ("view", commands::view::cmd_view(args, global)),
        Commands::Print(args) => ("print", commands::print::cmd_print(args, global)),
        Commands::Paths(args) => ("paths", commands::paths::cmd_paths(args, global)),
    };

    if let Err(err) = result {
        tracing::debug!(command = name, error = ?err, "command failed");
        if cli.json {
            let _ = ui::json::emit_event(&ErrorEvent::new(name, format!("{:#}", err)));
        } else {
            let caps = ui::terminal::detect_capabilities();
            let color = caps.supports_color && cli.color != Some(ColorWhen::Never);
            let unicode = caps.supports_unicode && !cli.ascii;
            ui::output::print_error(&err, unicode, color);
        }
        std::process::exit(1);
    }
}

/// Logs go to stderr; `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
