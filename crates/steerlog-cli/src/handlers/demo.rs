//! The breakfast demo: declare three fields, fill one record, render it

use crate::error::{Error, Result};
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use serde::Serialize;
use steerlog_core::{Field, LogRecord, Logger};

#[derive(Serialize)]
struct DemoReport<'a> {
    fields: &'a [Field],
    record: &'a LogRecord,
    rendered: &'a str,
}

/// Three integer fields and a record whose last value is a float
fn breakfast() -> steerlog_core::Result<(Logger, LogRecord)> {
    let mut logger = Logger::new();
    logger.add_integer_field("bacons")?;
    logger.add_integer_field("eggs")?;
    logger.add_integer_field("toasts")?;

    let mut record = LogRecord::new();
    record.push_int(3);
    record.push_int(30);
    record.push_float(2.3);

    Ok((logger, record))
}

/// Handle the demo command
pub fn handle_demo(output: &mut OutputWriter) -> Result<()> {
    let _timer = Timer::new("demo");

    let (logger, record) = breakfast()?;
    let rendered = logger.render(&record);
    if rendered.is_empty() {
        return Err(Error::other("demo rendered an empty string"));
    }
    tracing::debug!(record = %record, "Rendered demo record");

    if output.is_human() {
        output.writeln(&rendered)
    } else {
        output.data(&DemoReport {
            fields: logger.fields(),
            record: &record,
            rendered: &rendered,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use crate::output::capture::writer;

    #[test]
    fn test_demo_prints_rendered_breakfast() {
        let (mut output, captured) = writer(OutputFormat::Human, false);
        handle_demo(&mut output).unwrap();
        assert_eq!(captured.text(), "bacons,eggs,toasts\n3,30,2.3\n");
    }

    #[test]
    fn test_demo_json_report() {
        let (mut output, captured) = writer(OutputFormat::Json, false);
        handle_demo(&mut output).unwrap();

        let report: serde_json::Value = serde_json::from_str(captured.text().trim_end()).unwrap();
        assert_eq!(report["rendered"], "bacons,eggs,toasts\n3,30,2.3");
        assert_eq!(report["fields"][2]["name"], "toasts");
        assert_eq!(report["fields"][2]["data_type"], "integer");
        assert_eq!(report["record"][1], 30);
        assert_eq!(report["record"].as_array().unwrap().len(), 3);
    }
}
