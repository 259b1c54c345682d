//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! and help text. No business logic lives here: product tags are taken as
//! free text so the core factories decide what they accept.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "fabrik",
    bin_name = "fabrik",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f3ed} Computer and shape factories",
    long_about = "Fabrik builds products through tag-dispatched factories: \
                  computers (PC, Server) and geometric shapes.",
    after_help = "EXAMPLES:\n\
        \x20 fabrik computer pc --ram 16GB --hdd 512GB --cpu i7\n\
        \x20 fabrik computer SERVER --ram 64GB --hdd 2TB --cpu Xeon\n\
        \x20 fabrik shape circle 2 --draw\n\
        \x20 fabrik list --format json",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Build a computer from a type tag.
    #[command(
        visible_alias = "c",
        about = "Build a computer",
        after_help = "EXAMPLES:\n\
            \x20 fabrik computer pc     --ram 16GB --hdd 512GB --cpu i7\n\
            \x20 fabrik computer server --ram 64GB --hdd 2TB   --cpu Xeon\n\
            \x20 fabrik computer PC     # fields from config defaults"
    )]
    Computer(ComputerArgs),

    /// Build, measure, and optionally draw a shape.
    #[command(
        visible_alias = "s",
        about = "Build and measure a shape",
        after_help = "EXAMPLES:\n\
            \x20 fabrik shape circle 2\n\
            \x20 fabrik shape rectangle 4 2 --draw\n\
            \x20 fabrik shape triangle 3 4 5 --precision 1"
    )]
    Shape(ShapeArgs),

    /// List everything the factories can build.
    #[command(
        visible_alias = "ls",
        about = "List buildable products",
        after_help = "EXAMPLES:\n\
            \x20 fabrik list\n\
            \x20 fabrik list --format csv"
    )]
    List(ListArgs),

    /// Initialise a Fabrik configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 fabrik init                      # default location\n\
            \x20 fabrik --config ./fabrik.toml init"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 fabrik completions bash > ~/.local/share/bash-completion/completions/fabrik\n\
            \x20 fabrik completions zsh  > ~/.zfunc/_fabrik\n\
            \x20 fabrik completions fish > ~/.config/fish/completions/fabrik.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Fabrik configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 fabrik config get defaults.ram\n\
            \x20 fabrik config list\n\
            \x20 fabrik config path"
    )]
    Config(ConfigCommands),
}

// ── computer ──────────────────────────────────────────────────────────────────

/// Arguments for `fabrik computer`.
#[derive(Debug, Args)]
pub struct ComputerArgs {
    /// Computer type, matched case-insensitively (`pc` or `server`).
    #[arg(value_name = "TYPE", help = "Computer type (pc, server)")]
    pub kind: String,

    /// Memory, stored verbatim.
    #[arg(long = "ram", value_name = "RAM", help = "Memory (default from config)")]
    pub ram: Option<String>,

    /// Storage, stored verbatim.
    #[arg(long = "hdd", value_name = "HDD", help = "Storage (default from config)")]
    pub hdd: Option<String>,

    /// Processor, stored verbatim.
    #[arg(long = "cpu", value_name = "CPU", help = "Processor (default from config)")]
    pub cpu: Option<String>,
}

// ── shape ─────────────────────────────────────────────────────────────────────

/// Arguments for `fabrik shape`.
#[derive(Debug, Args)]
pub struct ShapeArgs {
    /// Shape name, matched case-insensitively.
    #[arg(value_name = "SHAPE", help = "Shape (circle, rectangle, square, triangle)")]
    pub kind: String,

    /// Dimensions in the order `fabrik list` shows.
    ///
    /// Negative values are accepted here so the factory can report them.
    #[arg(
        value_name = "DIM",
        num_args = 0..,
        allow_negative_numbers = true,
        help = "Dimensions (e.g. radius, or width height)"
    )]
    pub dims: Vec<f64>,

    /// Render the shape after measuring it.
    #[arg(short = 'd', long = "draw", help = "Draw the shape")]
    pub draw: bool,

    /// Decimal places for area and perimeter.
    #[arg(
        short = 'p',
        long = "precision",
        value_name = "N",
        help = "Decimal places (default from config)"
    )]
    pub precision: Option<u32>,

    /// Glyph for filled cells when drawing.
    #[arg(long = "glyph", value_name = "CHAR", help = "Fill character for --draw")]
    pub glyph: Option<char>,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `fabrik list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `fabrik init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `fabrik completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `fabrik config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.ram`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_computer_command() {
        let cli = Cli::parse_from([
            "fabrik", "computer", "Server", "--ram", "64GB", "--hdd", "2TB", "--cpu", "Xeon",
        ]);
        match cli.command {
            Commands::Computer(args) => {
                // tag is passed through untouched; the core decides
                assert_eq!(args.kind, "Server");
                assert_eq!(args.ram.as_deref(), Some("64GB"));
                assert_eq!(args.cpu.as_deref(), Some("Xeon"));
            }
            other => panic!("expected Computer command, got {other:?}"),
        }
    }

    #[test]
    fn computer_fields_are_optional() {
        let cli = Cli::parse_from(["fabrik", "c", "pc"]);
        if let Commands::Computer(args) = cli.command {
            assert!(args.ram.is_none() && args.hdd.is_none() && args.cpu.is_none());
        } else {
            panic!("expected Computer command");
        }
    }

    #[test]
    fn parse_shape_with_negative_dimension() {
        let cli = Cli::parse_from(["fabrik", "shape", "circle", "-2", "--draw"]);
        if let Commands::Shape(args) = cli.command {
            assert_eq!(args.dims, vec![-2.0]);
            assert!(args.draw);
        } else {
            panic!("expected Shape command");
        }
    }

    #[test]
    fn parse_shape_multiple_dims() {
        let cli = Cli::parse_from(["fabrik", "s", "triangle", "3", "4", "5", "-p", "1"]);
        if let Commands::Shape(args) = cli.command {
            assert_eq!(args.dims, vec![3.0, 4.0, 5.0]);
            assert_eq!(args.precision, Some(1));
        } else {
            panic!("expected Shape command");
        }
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["fabrik", "--quiet", "--verbose", "list"]);
        assert!(result.is_err());
    }
}
