//! Integration tests for log files on disk

use std::fs;
use steerlog_core::format;
use steerlog_core::{DataType, Error, LogData, LogManager, LogRecord, Logger, LoggerKind};
use tempfile::TempDir;

fn agent_logger() -> Logger {
    let mut logger = Logger::new();
    logger.add_integer_field("agent").unwrap();
    logger.add_float_field("speed").unwrap();
    logger.add_long_field("frame").unwrap();
    logger
}

#[test]
fn test_file_written_by_manager_loads_as_log_data() {
    let dir = TempDir::new().unwrap();
    let mut manager = LogManager::new(dir.path());

    manager
        .create_logger("agents.log", LoggerKind::BasicWrite, agent_logger())
        .unwrap();
    for i in 0..5 {
        let record = LogRecord::new()
            .with(i)
            .with(i as f32 * 0.5)
            .with(1_000_000_000_000i64 + i as i64);
        manager.write_record("agents.log", &record).unwrap();
    }
    manager.close("agents.log").unwrap();

    let data = LogData::load(dir.path().join("agents.log")).unwrap();
    assert_eq!(data.len(), 5);
    assert_eq!(data.logger(), &agent_logger());
    assert_eq!(data.record_at(4).unwrap().float_at(1).unwrap(), 2.0);
    assert_eq!(
        data.record_at(3).unwrap().long_at(2).unwrap(),
        1_000_000_000_003
    );
}

#[test]
fn test_file_layout() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("breakfast.log");

    let logger = Logger::new()
        .with_field("bacons", DataType::Integer)
        .and_then(|l| l.with_field("eggs", DataType::Integer))
        .unwrap();
    let mut writer = format::create(&path, logger).unwrap();
    writer
        .write_record(&LogRecord::new().with(3).with(30))
        .unwrap();
    writer
        .write_record_pretty(&LogRecord::new().with(4).with(31))
        .unwrap();
    drop(writer.into_inner().unwrap());

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text, "bacons 0 eggs 0 \n3 30 \n4      31   \n");
}

#[test]
fn test_appending_two_loaded_logs() {
    let dir = TempDir::new().unwrap();
    let left_path = dir.path().join("left.log");
    let right_path = dir.path().join("right.log");

    fs::write(&left_path, "collisions 0 \n1 \n0 \n").unwrap();
    fs::write(&right_path, "time 1 agent 3 \n0.5 a \n0.75 b \n").unwrap();

    let mut left = LogData::load(&left_path).unwrap();
    let right = LogData::load(&right_path).unwrap();
    left.append(&right).unwrap();

    assert_eq!(left.logger().metadata(), "collisions 0 time 1 agent 3 \n");
    let rendered = left.logger().render(left.record_at(1).unwrap());
    assert_eq!(rendered, "collisions,time,agent\n0,0.75,b");
}

#[test]
fn test_loading_corrupt_file_reports_line() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.log");
    fs::write(&path, "count 0 \n1 \n2 \nthree \n").unwrap();

    match LogData::load(&path) {
        Err(Error::Format { line, .. }) => assert_eq!(line, 4),
        other => panic!("expected a format error, got {:?}", other.map(|d| d.len())),
    }
}

#[test]
fn test_loading_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = LogData::load(dir.path().join("missing.log")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
    assert!(err.to_string().contains("missing.log"));
}
