//! Print the field declarations of a log file

use super::existing_log;
use crate::cli::FieldsArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::OutputWriter;
use steerlog_core::format;

/// Handle the fields command
///
/// Only the metadata line is read.
pub fn handle_fields(args: FieldsArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let path = existing_log(config, &args.file)?;
    let reader = format::open(&path)?;
    let fields = reader.logger().fields();

    if !output.is_human() {
        return output.data(&fields);
    }

    let rows: Vec<Vec<String>> = fields
        .iter()
        .enumerate()
        .map(|(i, field)| {
            vec![
                i.to_string(),
                field.name.clone(),
                field.data_type.to_string(),
                field.data_type.code().to_string(),
            ]
        })
        .collect();
    output.table(&["#", "name", "type", "code"], &rows)
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

    fn fields_of(dir: &TempDir, format: OutputFormat) -> Result<String> {
        let config = config_in(dir.path());
        let (mut output, captured) = writer(format, false);
        handle_fields(
            FieldsArgs {
                file: PathBuf::from("agents.log"),
            },
            &config,
            &mut output,
        )?;
        Ok(captured.text())
    }

    #[test]
    fn test_fields_table() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("agents.log"), "id 2 name 3 \n7 a1 \n").unwrap();

        let text = fields_of(&dir, OutputFormat::Human).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "# │ name │ type      │ code");
        assert_eq!(lines[2], "0 │ id   │ long_long │ 2");
        assert_eq!(lines[3], "1 │ name │ string    │ 3");
    }

    #[test]
    fn test_fields_yaml() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("agents.log"), "id 2 \n").unwrap();

        let text = fields_of(&dir, OutputFormat::Yaml).unwrap();
        assert_eq!(text, "- name: id\n  data_type: long_long\n");
    }

    #[test]
    fn test_fields_bad_metadata() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("agents.log"), "id 9 \n").unwrap();

        let err = fields_of(&dir, OutputFormat::Human).unwrap_err();
        assert!(matches!(
            err,
            Error::Core(steerlog_core::Error::UnknownDataType { code: 9 })
        ));
    }
}
