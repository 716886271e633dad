//! Steerlog CLI - command-line interface for typed simulation logs
//!
//! This is the main entry point for the steerlog CLI application,
//! providing commands for running the breakfast demo and for writing,
//! showing and inspecting log files.

mod cli;
mod config;
mod error;
mod handlers;
mod logging;
mod output;

use cli::{Cli, Commands, OutputFormat};
use colored::control;
use config::Config;
use error::{Error, Result};
use logging::{timing::Timer, LoggingConfig};
use output::OutputWriter;
use std::process;
use tracing::instrument;

fn main() {
    // Parse command-line arguments
    let cli = Cli::parse_args();

    // Load configuration first so it can shape logging and output
    let config = match Config::load_with_file(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => exit_with(&e, cli.use_color()),
    };

    let use_color = cli.use_color() && config.output.color;
    control::set_override(use_color);

    if let Err(e) = init_logging(&cli, &config) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    match run(cli, &config) {
        Ok(()) => process::exit(0),
        Err(e) => exit_with(&e, use_color),
    }
}

fn exit_with(error: &Error, use_color: bool) -> ! {
    eprintln!("{}", error::format_error(error, use_color));

    if error.should_show_help() {
        eprintln!("\nFor more information, try '--help'");
    }

    process::exit(error.exit_code());
}

/// Main application logic
#[instrument(skip(cli, config), fields(command = ?cli.command))]
fn run(cli: Cli, config: &Config) -> Result<()> {
    let _timer = Timer::new("cli_execution");

    let format = output_format(&cli, config);
    let mut output = OutputWriter::new(format, control::SHOULD_COLORIZE.should_colorize(), cli.quiet);

    tracing::info!(
        command = ?cli.command,
        verbosity = cli.verbosity_level(),
        ?format,
        "Executing command"
    );

    match cli.command {
        Commands::Demo => handlers::handle_demo(&mut output),
        Commands::Write(args) => handlers::handle_write(args, config, &mut output),
        Commands::Show(args) => handlers::handle_show(args, config, &mut output),
        Commands::Fields(args) => handlers::handle_fields(args, config, &mut output),
        Commands::Completions(args) => handlers::handle_completions(args, &mut std::io::stdout()),
    }
}

/// `--output` wins over the configured format
fn output_format(cli: &Cli, config: &Config) -> OutputFormat {
    cli.output.unwrap_or(config.output.format)
}

/// Initialize the logging system
fn init_logging(cli: &Cli, config: &Config) -> Result<()> {
    let mut logging_config = LoggingConfig::from_verbosity(cli.verbosity_level());
    logging_config.apply_file_settings(&config.logging, cli.verbosity_level());

    // Environment overrides the configuration file
    logging_config.merge_with_env();

    // If quiet mode, only log errors
    if cli.quiet {
        logging_config.level = "error".to_string();
        logging_config.console = false;
    }

    logging::init_logging(logging_config)
}
