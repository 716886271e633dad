//! Print the records of a log file

use super::existing_log;
use crate::cli::ShowArgs;
use crate::config::Config;
use crate::error::Result;
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use serde::Serialize;
use std::path::Path;
use steerlog_core::{Field, LogData, LogRecord};

#[derive(Serialize)]
struct ShowReport<'a> {
    file: &'a Path,
    fields: &'a [Field],
    total: usize,
    records: Vec<&'a LogRecord>,
}

/// Handle the show command
pub fn handle_show(args: ShowArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let path = existing_log(config, &args.file)?;
    let data = {
        let _timer = Timer::with_details("load", &path.display().to_string());
        LogData::load(&path)?
    };

    let records: Vec<&LogRecord> = match args.index {
        Some(index) => {
            let record = data
                .record_at(index)
                .ok_or(steerlog_core::Error::IndexOutOfRange {
                    index,
                    len: data.len(),
                })?;
            vec![record]
        }
        None => data
            .records()
            .iter()
            .take(args.limit.unwrap_or(usize::MAX))
            .collect(),
    };

    if !output.is_human() {
        return output.data(&ShowReport {
            file: &path,
            fields: data.logger().fields(),
            total: data.len(),
            records,
        });
    }

    output.section(&format!("{} ({} record(s))", path.display(), data.len()))?;
    if records.is_empty() {
        return output.warning("no records to show");
    }

    let headers: Vec<&str> = data
        .logger()
        .fields()
        .iter()
        .map(|f| f.name.as_str())
        .collect();
    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|record| record.values().iter().map(ToString::to_string).collect())
        .collect();
    output.table(&headers, &rows)?;

    if records.len() < data.len() {
        output.info(&format!(
            "showing {} of {} record(s)",
            records.len(),
            data.len()
        ))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use crate::error::Error;
    use crate::handlers::test_support::config_in;
    use crate::output::capture::writer;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn fixture() -> (TempDir, Config) {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("walk.log"),
            "frame 0 speed 1 \n0 0.5 \n1 1.25 \n2 1.5 \n",
        )
        .unwrap();
        let config = config_in(dir.path());
        (dir, config)
    }

    fn show(file: &str, index: Option<usize>, limit: Option<usize>) -> ShowArgs {
        ShowArgs {
            file: PathBuf::from(file),
            index,
            limit,
        }
    }

    #[test]
    fn test_show_table() {
        let (_dir, config) = fixture();
        let (mut output, captured) = writer(OutputFormat::Human, false);

        handle_show(show("walk.log", None, Some(2)), &config, &mut output).unwrap();

        let text = captured.text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "");
        assert!(lines[1].starts_with("=== ") && lines[1].ends_with("walk.log (3 record(s)) ==="));
        assert_eq!(lines[2], "frame │ speed");
        assert_eq!(lines[4], "0     │ 0.5");
        assert_eq!(lines[5], "1     │ 1.25");
        assert_eq!(lines[6], "INFO: showing 2 of 3 record(s)");
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn test_show_all_records_has_no_footer() {
        let (_dir, config) = fixture();
        let (mut output, captured) = writer(OutputFormat::Human, false);

        handle_show(show("walk.log", None, None), &config, &mut output).unwrap();

        let text = captured.text();
        assert!(text.ends_with("2     │ 1.5\n"));
        assert!(!text.contains("INFO:"));
    }

    #[test]
    fn test_show_one_record_as_json() {
        let (_dir, config) = fixture();
        let (mut output, captured) = writer(OutputFormat::Json, false);

        handle_show(show("walk.log", Some(2), None), &config, &mut output).unwrap();

        let report: serde_json::Value = serde_json::from_str(captured.text().trim_end()).unwrap();
        assert_eq!(report["total"], 3);
        assert_eq!(report["records"], serde_json::json!([[2, 1.5]]));
        assert_eq!(report["fields"][0]["name"], "frame");
    }

    #[test]
    fn test_show_index_out_of_range() {
        let (_dir, config) = fixture();
        let (mut output, _) = writer(OutputFormat::Human, false);

        let err = handle_show(show("walk.log", Some(3), None), &config, &mut output).unwrap_err();
        assert!(matches!(
            err,
            Error::Core(steerlog_core::Error::IndexOutOfRange { index: 3, len: 3 })
        ));
    }

    #[test]
    fn test_show_empty_log_warns() {
        let (dir, config) = fixture();
        std::fs::write(dir.path().join("empty.log"), "frame 0 \n").unwrap();
        let (mut output, captured) = writer(OutputFormat::Human, false);

        handle_show(show("empty.log", None, None), &config, &mut output).unwrap();
        assert!(captured.text().ends_with("WARNING: no records to show\n"));
    }

    #[test]
    fn test_show_missing_file() {
        let (_dir, config) = fixture();
        let (mut output, _) = writer(OutputFormat::Human, false);

        let err = handle_show(show("nope.log", None, None), &config, &mut output).unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
        assert_eq!(err.exit_code(), 3);
    }
}
