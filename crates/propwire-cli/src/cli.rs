//! Command-line interface argument parsing and definitions
//!
//! This module defines the CLI structure using clap's derive API,
//! providing a type-safe and well-documented command interface.

use clap::{Parser, Subcommand, ValueEnum};
use is_terminal::IsTerminal;
use std::path::PathBuf;

/// Propwire CLI - Convert between CRM API documents and typed entities
///
/// Decodes single-entity and list responses into contacts, companies and
/// deals, encodes property bags into request documents, and prints the
/// field mappings each entity registers.
#[derive(Parser, Debug)]
#[command(
    name = "propwire",
    version,
    author,
    about,
    long_about = None,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Enable verbose output (can be used multiple times for increased verbosity)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "PROPWIRE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format for results (defaults to the config file, then human)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Decode an API response document into an entity
    Decode(DecodeArgs),

    /// Encode a flat property bag into a request document
    Encode(EncodeArgs),

    /// Show the field mapping an entity registers
    Schema(SchemaArgs),

    /// Manage configuration files and settings
    Config(ConfigArgs),

    /// Generate shell completions for the specified shell
    Completions(CompletionsArgs),
}

/// Arguments for the decode command
#[derive(Parser, Debug)]
pub struct DecodeArgs {
    /// Path to the response document (JSON or YAML)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Entity type the document describes
    #[arg(short, long, value_enum)]
    pub entity: EntityKind,

    /// Treat the document as a list response
    #[arg(long, conflicts_with = "flat")]
    pub list: bool,

    /// Treat the document as a flat property bag
    #[arg(long)]
    pub flat: bool,
}

impl DecodeArgs {
    pub fn shape(&self) -> DocumentShape {
        if self.list {
            DocumentShape::List
        } else if self.flat {
            DocumentShape::Flat
        } else {
            DocumentShape::Single
        }
    }
}

/// Arguments for the encode command
#[derive(Parser, Debug)]
pub struct EncodeArgs {
    /// Path to a flat property bag keyed by wire name (JSON or YAML)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Entity type to encode as
    #[arg(short, long, value_enum)]
    pub entity: EntityKind,

    /// Wire convention for the emitted entries
    #[arg(long, value_enum, default_value = "auto")]
    pub convention: ConventionChoice,

    /// Save the request document to a file instead of printing it
    #[arg(long = "save-to", value_name = "OUTPUT_FILE")]
    pub save_to: Option<PathBuf>,
}

/// Arguments for the schema command
#[derive(Parser, Debug)]
pub struct SchemaArgs {
    /// Entity type to describe
    #[arg(short, long, value_enum)]
    pub entity: EntityKind,

    /// Describe the list-response container instead of the entity
    #[arg(long)]
    pub list: bool,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration management actions
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Initialize a default configuration file
    Init(ConfigInitArgs),

    /// Show current configuration values
    Show(ConfigShowArgs),
}

/// Arguments for config init
#[derive(Parser, Debug)]
pub struct ConfigInitArgs {
    /// Initialize user config (<config_dir>/propwire/config.toml)
    #[arg(long)]
    pub user: bool,

    /// Force overwrite existing config files
    #[arg(long)]
    pub force: bool,
}

/// Arguments for config show
#[derive(Parser, Debug)]
pub struct ConfigShowArgs {
    /// Show configuration in specified format
    #[arg(short, long, value_enum, default_value = "toml")]
    pub format: ConfigFormat,
}

/// Configuration file formats
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ConfigFormat {
    /// TOML format
    Toml,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

/// Arguments for generating shell completions
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Output format options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable formatted output
    Human,
    /// JSON output
    Json,
    /// YAML output
    Yaml,
    /// Pretty-printed JSON output
    JsonPretty,
}

impl OutputFormat {
    /// Parse the `output.format` value of a config file
    pub fn from_config(value: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(value, true).ok()
    }
}

/// Entity types the CLI can convert
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum EntityKind {
    Contact,
    Company,
    Deal,
}

/// How an inbound document is laid out
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DocumentShape {
    /// `{"<identity>": .., "properties": {..}}`
    Single,
    /// `{"<collection>": [..], ..}`
    List,
    /// `{"<wire name>": value, ..}`
    Flat,
}

/// Wire convention selection for `encode`
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ConventionChoice {
    /// Follow the entity's route version
    Auto,
    /// `{"name": .., "value": ..}` entries
    Envelope,
    /// `{"propertyName": .., "value": ..}` entries
    Flat,
}

/// Supported shells for completion generation
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    PowerShell,
    /// Elvish shell
    Elvish,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the effective verbosity level (considering quiet flag)
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }

    /// Check if colored output should be used
    pub fn use_color(&self) -> bool {
        !self.no_color && std::io::stdout().is_terminal()
    }
}

impl Shell {
    /// Convert to clap_complete shell type
    pub fn to_clap_shell(self) -> clap_complete::Shell {
        match self {
            Shell::Bash => clap_complete::Shell::Bash,
            Shell::Zsh => clap_complete::Shell::Zsh,
            Shell::Fish => clap_complete::Shell::Fish,
            Shell::PowerShell => clap_complete::Shell::PowerShell,
            Shell::Elvish => clap_complete::Shell::Elvish,
        }
    }
}
