//! Property-based tests for log lines
//!
//! These tests check that typed lines, pretty lines and the display
//! render agree with the logger's fields for arbitrary schemas.

use proptest::prelude::*;
use std::io::Cursor;
use steerlog_core::{DataType, LogReader, LogRecord, LogWriter, Logger, Value};

/// Strategy for generating data types
fn data_type_strategy() -> impl Strategy<Value = DataType> {
    prop_oneof![
        Just(DataType::Integer),
        Just(DataType::Float),
        Just(DataType::LongLong),
        Just(DataType::String),
    ]
}

/// Strategy for generating a value of a given type
fn value_strategy(data_type: DataType) -> BoxedStrategy<Value> {
    match data_type {
        DataType::Integer => any::<i32>().prop_map(Value::Integer).boxed(),
        DataType::Float => (-1.0e6f32..1.0e6f32).prop_map(Value::Float).boxed(),
        DataType::LongLong => any::<i64>().prop_map(Value::LongLong).boxed(),
        DataType::String => "[a-zA-Z0-9_.-]{1,12}".prop_map(Value::String).boxed(),
    }
}

/// Strategy for generating a logger and a batch of records that fit it
fn log_strategy() -> impl Strategy<Value = (Logger, Vec<LogRecord>)> {
    proptest::collection::vec(("[a-z][a-z0-9_]{0,10}", data_type_strategy()), 1..8)
        .prop_flat_map(|fields| {
            let mut logger = Logger::new();
            for (name, data_type) in &fields {
                logger.add_field(name.clone(), *data_type).unwrap();
            }
            let record = fields
                .iter()
                .map(|(_, t)| value_strategy(*t))
                .collect::<Vec<_>>()
                .prop_map(LogRecord::from);
            (Just(logger), proptest::collection::vec(record, 0..6))
        })
}

proptest! {
    #[test]
    fn written_lines_read_back((logger, records) in log_strategy(), pretty in any::<bool>()) {
        let mut writer = LogWriter::new(logger.clone(), Vec::new());
        writer.write_metadata().unwrap();
        for record in &records {
            if pretty {
                writer.write_record_pretty(record).unwrap();
            } else {
                writer.write_record(record).unwrap();
            }
        }
        let bytes = writer.into_inner().unwrap();

        let mut reader = LogReader::open(Cursor::new(bytes)).unwrap();
        prop_assert_eq!(reader.logger(), &logger);
        let read = reader.read_all().unwrap();
        prop_assert_eq!(read, records);
    }

    #[test]
    fn render_has_one_column_per_field((logger, records) in log_strategy()) {
        for record in &records {
            let rendered = logger.render(record);
            let (header, values) = rendered.split_once('\n').unwrap();
            prop_assert_eq!(header.split(',').count(), logger.field_count());
            prop_assert_eq!(values.split(',').count(), record.len());
        }
    }

    #[test]
    fn pretty_columns_are_at_least_name_width((logger, records) in log_strategy()) {
        for record in &records {
            let line = logger.to_pretty_line(record).unwrap();
            let plain = logger.to_line(record).unwrap();
            let name_width: usize = logger.fields().iter().map(|f| f.name.len()).sum();
            prop_assert!(line.len() >= name_width);
            prop_assert!(line.len() >= plain.len());
        }
    }
}
