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
    name    = "akiro",
    bin_name = "akiro",
    version  = env!("CARGO_PKG_VERSION"),
    author   = "Obiechi Ebuka Samuel <oesisu@outlook.com>",
    about    = "\u{2692} Batch Conan installs from a YAML specification",
    long_about = "Akiro expands a YAML+Jinja package specification into a \
                  sequence of 'conan install' invocations and runs them for you.",
    after_help = "EXAMPLES:\n\
        \x20 akiro install subotai.yaml -b Debug -p clang16\n\
        \x20 akiro install --built-list built.json\n\
        \x20 akiro plan subotai.yaml --format json\n\
        \x20 akiro check subotai.yaml",
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
    /// Expand the specification and run every install.
    #[command(
        visible_alias = "i",
        about = "Run the generated install commands",
        after_help = "EXAMPLES:\n\
            \x20 akiro install\n\
            \x20 akiro install packages.yaml -b Debug\n\
            \x20 akiro install --built-list     # merge results into built.json\n\
            \x20 akiro install --built-list out/manifest.json"
    )]
    Install(InstallArgs),

    /// Print the generated commands without running anything.
    #[command(
        visible_alias = "dry-run",
        about = "Show the commands that would run",
        after_help = "EXAMPLES:\n\
            \x20 akiro plan\n\
            \x20 akiro plan packages.yaml --format json"
    )]
    Plan(PlanArgs),

    /// Validate a specification file and report what it declares.
    #[command(
        about = "Check a specification file",
        after_help = "EXAMPLES:\n\
            \x20 akiro check\n\
            \x20 akiro check packages.yaml -b Debug"
    )]
    Check(CheckArgs),

    /// Initialise an Akiro configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 akiro init           # default location\n\
            \x20 akiro init --force   # overwrite existing config"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 akiro completions bash > ~/.local/share/bash-completion/completions/akiro\n\
            \x20 akiro completions zsh  > ~/.zfunc/_akiro\n\
            \x20 akiro completions fish > ~/.config/fish/completions/akiro.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the Akiro configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 akiro config get defaults.profile\n\
            \x20 akiro config list"
    )]
    Config(ConfigCommands),
}

// ── shared spec options ───────────────────────────────────────────────────────

/// Options shared by every command that reads a specification file.
#[derive(Debug, Args)]
pub struct SpecOpts {
    /// Specification file. Defaults to the configured spec file
    /// (`subotai.yaml` out of the box).
    #[arg(value_name = "SPEC", help = "Specification file")]
    pub spec: Option<PathBuf>,

    /// Build type passed to Conan and exposed to the template as
    /// `{{ build_type }}`.
    #[arg(
        short = 'b',
        long = "build-type",
        value_name = "TYPE",
        help = "Build type (default: Release)"
    )]
    pub build_type: Option<String>,
}

// ── install ───────────────────────────────────────────────────────────────────

/// Arguments for `akiro install`.
#[derive(Debug, Args)]
pub struct InstallArgs {
    #[command(flatten)]
    pub spec: SpecOpts,

    /// Conan profile applied to all contexts (`-pr:a`).
    #[arg(
        short = 'p',
        long = "profile",
        value_name = "PROFILE",
        help = "Conan profile (default: default)"
    )]
    pub profile: Option<String>,

    /// Collect the list of built packages into a merged JSON manifest.
    #[arg(
        long = "built-list",
        value_name = "FILE",
        num_args = 0..=1,
        default_missing_value = "built.json",
        help = "Write a merged built-package manifest (default file: built.json)"
    )]
    pub built_list: Option<PathBuf>,
}

// ── plan ──────────────────────────────────────────────────────────────────────

/// Arguments for `akiro plan`.
#[derive(Debug, Args)]
pub struct PlanArgs {
    #[command(flatten)]
    pub spec: SpecOpts,

    /// Conan profile applied to all contexts (`-pr:a`).
    #[arg(
        short = 'p',
        long = "profile",
        value_name = "PROFILE",
        help = "Conan profile (default: default)"
    )]
    pub profile: Option<String>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "list",
        help = "Output format"
    )]
    pub format: PlanFormat,
}

/// Output format for the `plan` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlanFormat {
    /// One command line per row.
    List,
    /// JSON array of argument arrays.
    Json,
}

// ── check ─────────────────────────────────────────────────────────────────────

/// Arguments for `akiro check`.
#[derive(Debug, Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub spec: SpecOpts,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `akiro init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `akiro completions`.
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

/// Subcommands for `akiro config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.profile`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
