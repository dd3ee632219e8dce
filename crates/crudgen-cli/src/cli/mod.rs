//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "crudgen",
    bin_name = "crudgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} CRUD front-end generator",
    long_about = "Crudgen turns a JSON description of business objects into a \
                  browsable AngularJS admin application: one list view, one \
                  edit form and one data service per object.",
    after_help = "EXAMPLES:\n\
        \x20 crudgen generate garage.json -o ./garage\n\
        \x20 crudgen generate garage.json --templates ./my-base --strict\n\
        \x20 crudgen check garage.json\n\
        \x20 crudgen completions bash > /usr/share/bash-completion/completions/crudgen",
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
    /// Generate an application from a project description.
    #[command(
        visible_alias = "g",
        about = "Generate an application",
        after_help = "EXAMPLES:\n\
            \x20 crudgen generate garage.json\n\
            \x20 crudgen generate garage.json -o ./out --force\n\
            \x20 crudgen generate garage.json --dry-run"
    )]
    Generate(GenerateArgs),

    /// Validate a project description without generating anything.
    #[command(
        about = "Validate a project description",
        after_help = "EXAMPLES:\n\
            \x20 crudgen check garage.json\n\
            \x20 crudgen check garage.json --strict"
    )]
    Check(CheckArgs),

    /// Initialise a crudgen configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 crudgen init\n\
            \x20 crudgen init --force"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 crudgen completions bash > ~/.local/share/bash-completion/completions/crudgen\n\
            \x20 crudgen completions zsh  > ~/.zfunc/_crudgen\n\
            \x20 crudgen completions fish > ~/.config/fish/completions/crudgen.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the crudgen configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 crudgen config get generation.output_dir\n\
            \x20 crudgen config list\n\
            \x20 crudgen config path"
    )]
    Config(ConfigCommands),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `crudgen generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// JSON project description.
    #[arg(value_name = "PROJECT", help = "Path to the project description (JSON)")]
    pub project: PathBuf,

    /// Output directory.  Falls back to `generation.output_dir`, then to a
    /// directory named after the project.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Output directory"
    )]
    pub output: Option<PathBuf>,

    /// Base code directory replacing the bundled one.
    #[arg(
        short = 't',
        long = "templates",
        value_name = "DIR",
        help = "Base code directory (default: bundled AngularJS base)"
    )]
    pub templates: Option<PathBuf>,

    /// Fail on relations naming an unknown object.
    #[arg(long = "strict", help = "Reject unresolved parent relations")]
    pub strict: bool,

    /// Write into an existing directory.
    #[arg(long = "force", help = "Write into an existing output directory")]
    pub force: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── check ─────────────────────────────────────────────────────────────────────

/// Arguments for `crudgen check`.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// JSON project description.
    #[arg(value_name = "PROJECT", help = "Path to the project description (JSON)")]
    pub project: PathBuf,

    /// Treat unresolved relations as errors.
    #[arg(long = "strict", help = "Treat unresolved relations as errors")]
    pub strict: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `crudgen init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `crudgen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `crudgen config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `generation.output_dir`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
