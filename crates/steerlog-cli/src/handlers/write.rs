//! Write a log file from command-line field declarations and records

use crate::cli::WriteArgs;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use serde::Serialize;
use std::path::Path;
use steerlog_core::{Field, LogManager, LogRecord, Logger, LoggerKind, Value};

#[derive(Serialize)]
struct WriteSummary<'a> {
    file: &'a Path,
    fields: &'a [Field],
    records: usize,
}

/// Parse one `--record` argument against the declared fields
///
/// `number` is the 1-based position of the record on the command line.
fn parse_record(logger: &Logger, values: &str, number: usize) -> Result<LogRecord> {
    let tokens: Vec<&str> = values.split_whitespace().collect();
    if tokens.len() != logger.field_count() {
        return Err(Error::invalid_args(format!(
            "record {} has {} value(s) but {} field(s) are declared",
            number,
            tokens.len(),
            logger.field_count()
        )));
    }

    tokens
        .iter()
        .zip(logger.fields())
        .map(|(token, field)| Value::parse(token, field.data_type, number).map_err(Error::from))
        .collect()
}

/// Handle the write command
pub fn handle_write(args: WriteArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let name = args.file.to_string_lossy().into_owned();
    let _timer = Timer::with_details("write", &name);

    let mut logger = Logger::new();
    for field in &args.fields {
        logger.add_field(field.name.clone(), field.data_type)?;
    }

    let records = args
        .records
        .iter()
        .enumerate()
        .map(|(i, values)| parse_record(&logger, values, i + 1))
        .collect::<Result<Vec<_>>>()?;

    let mut manager = LogManager::new(config.log_root());
    let path = manager.path_of(&name);
    if path.exists() && !args.force {
        return Err(Error::FileExists { path });
    }

    let writer = manager
        .create_logger(&name, LoggerKind::BasicWrite, logger)?
        .writer()
        .ok_or_else(|| Error::other(format!("{} was not opened for writing", name)))?;
    for record in &records {
        if args.pretty {
            writer.write_record_pretty(record)?;
        } else {
            writer.write_record(record)?;
        }
    }
    let written = writer.records_written();
    manager.close(&name)?;

    if output.is_human() {
        output.success(&format!("Wrote {} record(s) to {}", written, path.display()))
    } else {
        output.data(&WriteSummary {
            file: &path,
            fields: &args.fields,
            records: written,
        })
    }
}
