//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --verbose, --ascii) are inherited by all subcommands
//! - Every subcommand shares the same input and expansion arguments

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::loader::Format;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// objview - inspect nested data as an expandable tree
#[derive(Parser, Debug)]
#[command(name = "objview")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Use ASCII glyphs instead of unicode arrows
    #[arg(long, global = true)]
    pub ascii: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Browse the document interactively
    View(InspectArgs),

    /// Print the pre-expanded tree once
    Print(InspectArgs),

    /// Print the initially expanded paths
    Paths(InspectArgs),
}

impl Commands {
    pub fn args(&self) -> &InspectArgs {
        match self {
            Commands::View(args) | Commands::Print(args) | Commands::Paths(args) => args,
        }
    }
}

/// Input and expansion arguments shared by all commands
#[derive(Args, Debug, Clone)]
pub struct InspectArgs {
    /// Document to inspect ('-' for stdin)
    pub file: PathBuf,

    /// Input format (detected from the extension by default)
    #[arg(long, value_enum)]
    pub format: Option<Format>,

    /// Name shown on the root node
    #[arg(long)]
    pub name: Option<String>,

    /// Expand every node within N levels of the root
    #[arg(short = 'l', long, value_name = "N")]
    pub expand_level: Option<usize>,

    /// Expand a path such as '$.a.*' (can be specified multiple times)
    #[arg(short = 'p', long = "expand-path", value_name = "PATH")]
    pub expand_paths: Vec<String>,

    /// Show non-enumerable properties and prototypes
    #[arg(long)]
    pub show_nonenumerable: bool,

    /// Sort object keys alphabetically
    #[arg(long)]
    pub sort_keys: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_view() {
        let cli = Cli::try_parse_from(["objview", "view", "data.json"]).unwrap();
        if let Commands::View(args) = cli.command {
            assert_eq!(args.file, PathBuf::from("data.json"));
            assert!(args.format.is_none());
            assert!(args.expand_level.is_none());
            assert!(args.expand_paths.is_empty());
            assert!(!args.show_nonenumerable);
            assert!(!args.sort_keys);
        } else {
            panic!("Expected View command");
        }
    }

    #[test]
    fn test_cli_parse_print_with_args() {
        let cli = Cli::try_parse_from([
            "objview",
            "print",
            "-",
            "--format",
            "yaml",
            "--name",
            "config",
            "--expand-level",
            "2",
            "--expand-path",
            "$.a",
            "-p",
            "$.b.*",
            "--show-nonenumerable",
            "--sort-keys",
        ])
        .unwrap();

        if let Commands::Print(args) = cli.command {
            assert_eq!(args.file, PathBuf::from("-"));
            assert_eq!(args.format, Some(Format::Yaml));
            assert_eq!(args.name.as_deref(), Some("config"));
            assert_eq!(args.expand_level, Some(2));
            assert_eq!(args.expand_paths, vec!["$.a", "$.b.*"]);
            assert!(args.show_nonenumerable);
            assert!(args.sort_keys);
        } else {
            panic!("Expected Print command");
        }
    }

    #[test]
    fn test_cli_parse_paths() {
        let cli = Cli::try_parse_from(["objview", "paths", "a.toml", "--json"]).unwrap();
        assert!(cli.json);
        assert!(matches!(cli.command, Commands::Paths(_)));
        assert_eq!(cli.command.args().file, PathBuf::from("a.toml"));
    }

    #[test]
    fn test_cli_global_flags() {
        let cli = Cli::try_parse_from([
            "objview", "--color", "never", "--ascii", "-vv", "print", "a.json",
        ])
        .unwrap();
        assert!(matches!(cli.color, Some(ColorWhen::Never)));
        assert!(cli.ascii);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_cli_requires_file() {
        assert!(Cli::try_parse_from(["objview", "view"]).is_err());
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["objview", "print", "a", "--format", "xml"]).is_err());
    }
}
