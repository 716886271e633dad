//! Command-line interface argument parsing and definitions
//!
//! This module defines the CLI structure using clap's derive API,
//! providing a type-safe and well-documented command interface.

use clap::{Parser, Subcommand, ValueEnum};
use is_terminal::IsTerminal;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use steerlog_core::{DataType, Field};

/// Steerlog CLI - typed simulation logs
///
/// Declare fields, write records against them, and read the resulting
/// log files back as tables, JSON or YAML.
#[derive(Parser, Debug)]
#[command(
    name = "steerlog",
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
    #[arg(short, long, global = true, env = "STEERLOG_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format for results [default: human, or the configured format]
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
    /// Render the breakfast example: three integer fields and one record
    Demo,

    /// Write a log file from field declarations and records
    Write(WriteArgs),

    /// Read a log file and print its records
    Show(ShowArgs),

    /// Print the fields declared in a log file
    Fields(FieldsArgs),

    /// Generate shell completions for the specified shell
    Completions(CompletionsArgs),
}

/// Arguments for the write command
#[derive(Parser, Debug)]
pub struct WriteArgs {
    /// Log file to create, relative to the configured log directory
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Field declaration, in order (e.g. `speed:float`)
    #[arg(
        short,
        long = "field",
        value_name = "NAME:TYPE",
        required = true,
        value_parser = parse_field
    )]
    pub fields: Vec<Field>,

    /// One record as whitespace-separated values, one per field
    #[arg(
        short,
        long = "record",
        value_name = "VALUES",
        allow_hyphen_values = true
    )]
    pub records: Vec<String>,

    /// Pad values to their field name's width
    #[arg(long)]
    pub pretty: bool,

    /// Overwrite the file if it already exists
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the show command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Log file to read
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Show only the record at this index
    #[arg(long, conflicts_with = "limit")]
    pub index: Option<usize>,

    /// Show at most this many records
    #[arg(long)]
    pub limit: Option<usize>,
}

/// Arguments for the fields command
#[derive(Parser, Debug)]
pub struct FieldsArgs {
    /// Log file to inspect
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

/// Arguments for generating shell completions
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Output format options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
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

/// Parse a `name:type` field declaration
fn parse_field(s: &str) -> Result<Field, String> {
    let (name, data_type) = s
        .split_once(':')
        .ok_or_else(|| format!("expected NAME:TYPE, got '{}'", s))?;
    let data_type: DataType = data_type.parse()?;
    Field::new(name, data_type).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity_level() {
        let cli = Cli {
            verbose: 2,
            quiet: false,
            config: None,
            output: None,
            no_color: false,
            command: Commands::Demo,
        };
        assert_eq!(cli.verbosity_level(), 2);

        let quiet_cli = Cli { quiet: true, ..cli };
        assert_eq!(quiet_cli.verbosity_level(), 0);
    }

    #[test]
    fn test_parse_field() {
        let field = parse_field("speed:float").unwrap();
        assert_eq!(field.name, "speed");
        assert_eq!(field.data_type, DataType::Float);

        assert!(parse_field("speed").unwrap_err().contains("NAME:TYPE"));
        assert!(parse_field("speed:complex").is_err());
        assert!(parse_field(":integer").is_err());
    }

    #[test]
    fn test_write_args() {
        let cli = Cli::parse_from([
            "steerlog",
            "-o",
            "json",
            "write",
            "run.log",
            "-f",
            "step:integer",
            "--field",
            "agent:string",
            "-r",
            "0 a1",
            "-r",
            "1 a2",
        ]);
        assert_eq!(cli.output, Some(OutputFormat::Json));
        match cli.command {
            Commands::Write(args) => {
                assert_eq!(args.fields.len(), 2);
                assert_eq!(args.fields[1].data_type, DataType::String);
                assert_eq!(args.records, vec!["0 a1", "1 a2"]);
                assert!(!args.pretty);
            }
            other => panic!("expected write, got {:?}", other),
        }
    }

    #[test]
    fn test_write_record_starting_with_negative_value() {
        let cli = Cli::parse_from([
            "steerlog", "write", "run.log", "-f", "x:int", "-f", "y:float", "-r", "-3 -0.5",
            "--record", "-1 2",
        ]);
        match cli.command {
            Commands::Write(args) => {
                assert_eq!(args.records, vec!["-3 -0.5", "-1 2"]);
                assert_eq!(args.fields.len(), 2);
            }
            other => panic!("expected write, got {:?}", other),
        }
    }

    #[test]
    fn test_write_requires_a_field() {
        assert!(Cli::try_parse_from(["steerlog", "write", "run.log"]).is_err());
    }

    #[test]
    fn test_show_index_conflicts_with_limit() {
        let result = Cli::try_parse_from([
            "steerlog", "show", "run.log", "--index", "1", "--limit", "2",
        ]);
        assert!(result.is_err());
    }
}
