//! Integration tests for the logger facade
//!
//! These tests verify:
//! - Output resolution for every console/file combination
//! - Level thresholds
//! - Field attachment and nested loggers
//! - Output redirection
//! - Structured and human-readable rendering
//! - Construction-time configuration errors

use rust_logger_adapter::prelude::*;
use rust_logger_adapter::{info, warn};
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

fn captured_logger(builder: LoggerBuilder) -> (LoggerFacade, Arc<MemorySink>) {
    let console = Arc::new(MemorySink::new());
    let logger = builder
        .console_output(console.clone())
        .build()
        .expect("Failed to build logger");
    (logger, console)
}

fn structured_logger(level: Level) -> (LoggerFacade, Arc<MemorySink>) {
    captured_logger(LoggerFacade::builder().structured(true).level(level))
}

fn parse_lines(sink: &MemorySink) -> Vec<serde_json::Value> {
    sink.lines()
        .iter()
        .map(|line| serde_json::from_str(line).expect("line is valid JSON"))
        .collect()
}

#[test]
fn test_console_only_writes_to_console() {
    let (logger, console) = captured_logger(LoggerFacade::builder().force_colors(false));

    logger.info("to the console");

    assert!(Arc::ptr_eq(&logger.get_output(), &(console.clone() as Output)));
    assert_eq!(console.lines().len(), 1);
    assert!(console.contents().contains("to the console"));
}

#[test]
fn test_console_and_file_receive_the_same_record() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("both.log");

    let (logger, console) = captured_logger(
        LoggerFacade::builder()
            .structured(true)
            .file_location(&log_file),
    );

    logger.warn("fan out");

    let file_content = fs::read_to_string(&log_file).expect("Failed to read log file");
    assert_eq!(file_content, console.contents());
    assert_eq!(file_content.lines().count(), 1);
    assert!(file_content.contains("fan out"));
}

#[test]
fn test_file_target_appends_across_restarts() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("restart.log");

    for run in 0..2 {
        let logger = LoggerFacade::builder()
            .enable_console(false)
            .structured(true)
            .file_location(&log_file)
            .build()
            .expect("Failed to build logger");
        logger.info(&format!("run {}", run));
    }

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("run 0"));
    assert!(lines[1].contains("run 1"));
}

#[test]
fn test_no_targets_discards_everything() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("untouched.log");
    fs::write(&log_file, "").expect("Failed to create file");

    let logger = LoggerFacade::builder()
        .enable_console(false)
        .file_location("")
        .build()
        .expect("Failed to build logger");

    logger.error("goes nowhere");

    assert_eq!(logger.get_output().name(), "discard");
    assert_eq!(logger.metrics().dropped_count(), 0);
    assert_eq!(logger.metrics().total_logged(), 1);
    assert_eq!(fs::metadata(&log_file).expect("metadata").len(), 0);
}

#[test]
fn test_unopenable_file_fails_construction() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("missing").join("app.log");

    let err = LoggerFacade::builder()
        .file_location(&log_file)
        .build()
        .expect_err("parent directory does not exist");

    assert!(err.is_configuration());
    assert!(err.to_string().contains("unable to setup log file"));
}

#[test]
fn test_unknown_level_fails_construction() {
    let err = LoggerFacade::new(Config {
        level: Level::new("chatty"),
        ..Config::default()
    })
    .expect_err("level is not recognized");

    assert!(matches!(err, LoggerError::UnknownLevel { .. }));
    assert!(err.is_configuration());
}

#[test]
fn test_log_levels() {
    let (logger, console) = structured_logger(Level::WARN);

    logger.trace("Trace message");
    logger.debug("Debug message");
    logger.info("Info message");
    logger.warn("Warn message");
    logger.error("Error message");

    let records = parse_lines(&console);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["level"], "warning");
    assert_eq!(records[0]["msg"], "Warn message");
    assert_eq!(records[1]["level"], "error");
    assert_eq!(records[1]["msg"], "Error message");
}

#[test]
fn test_formatted_variants() {
    let (logger, console) = structured_logger(Level::TRACE);

    logger.tracef(format_args!("t{}", 1));
    logger.debugf(format_args!("d{}", 2));
    logger.infof(format_args!("i{}", 3));
    logger.warnf(format_args!("w{}", 4));
    logger.errorf(format_args!("e{}", 5));

    let messages: Vec<String> = parse_lines(&console)
        .iter()
        .map(|record| record["msg"].as_str().unwrap_or_default().to_string())
        .collect();
    assert_eq!(messages, vec!["t1", "d2", "i3", "w4", "e5"]);
}

#[test]
fn test_with_fields_adds_context_to_one_record() {
    let (logger, console) = structured_logger(Level::INFO);

    logger.with_fields(fields! { "a" => 1, "b" => 2 }).info("msg");
    logger.info("plain");

    let records = parse_lines(&console);
    assert_eq!(records[0]["a"], 1);
    assert_eq!(records[0]["b"], 2);
    assert!(records[1].get("a").is_none());
}

#[test]
fn test_with_fields_last_key_wins() {
    let (logger, console) = structured_logger(Level::INFO);

    logger.with_fields(fields! { "a" => 1, "a" => 2 }).info("dup");
    logger
        .with_fields(Fields::from_alternating(vec![
            FieldValue::from("a"),
            FieldValue::from(1),
            FieldValue::from("a"),
            FieldValue::from(2),
        ]))
        .info("alternating");

    for record in parse_lines(&console) {
        assert_eq!(record["a"], 2);
    }
}

#[test]
fn test_nested_logger_binds_fields() {
    let (logger, console) = structured_logger(Level::DEBUG);
    let nested = logger.nested(fields! { "req" => "123" });

    nested.debug("first");
    nested.with_fields(fields! { "step" => 2 }).info("second");
    warn!(nested, "third {}", 3);

    let records = parse_lines(&console);
    assert_eq!(records.len(), 3);
    for record in &records {
        assert_eq!(record["req"], "123");
    }
    assert_eq!(records[1]["step"], 2);
    assert!(records[2].get("step").is_none());
    assert_eq!(records[2]["msg"], "third 3");
}

#[test]
fn test_nested_fields_do_not_leak_into_parent() {
    let (logger, console) = structured_logger(Level::INFO);
    let nested = logger.nested(fields! { "req" => "123" });

    nested.info("scoped");
    logger.info("unscoped");

    let records = parse_lines(&console);
    assert_eq!(records[0]["req"], "123");
    assert!(records[1].get("req").is_none());
    assert_eq!(nested.fields().len(), 1);
}

#[test]
fn test_set_output_redirects_all_derived_loggers() {
    let (logger, initial) = structured_logger(Level::INFO);
    let nested = logger.nested(fields! { "component" => "db" });

    let replacement = Arc::new(MemorySink::new());
    logger.set_output(replacement.clone());

    logger.info("from parent");
    nested.info("from nested");
    logger.with_fields(fields! { "k" => "v" }).info("from handle");

    assert!(initial.is_empty());
    assert_eq!(replacement.lines().len(), 3);
    assert!(Arc::ptr_eq(&logger.get_output(), &(replacement as Output)));
}

#[test]
fn test_structured_output_has_configured_timestamp() {
    let (logger, console) = structured_logger(Level::INFO);
    logger.info("stamped");

    let record = &parse_lines(&console)[0];
    let time = record["time"].as_str().expect("time is a string");
    chrono::NaiveDateTime::parse_from_str(time, "%Y-%m-%d %H:%M:%S")
        .expect("time uses the configured layout");
}

#[test]
fn test_human_readable_output_has_no_structured_artifacts() {
    let (logger, console) = captured_logger(
        LoggerFacade::builder()
            .force_colors(false)
            .force_formatting(true),
    );
    info!(logger.with_fields(fields! { "user" => "alice" }), "User {} logged in", "alice");

    let line = &console.lines()[0];
    assert!(serde_json::from_str::<serde_json::Value>(line).is_err());
    assert!(!line.contains('{'));
    assert!(!line.contains("msg="));
    assert!(!line.contains("level="));
    assert!(line.contains(" INFO User alice logged in user=alice"));
}

#[test]
fn test_caller_capture() {
    let (logger, console) = captured_logger(
        LoggerFacade::builder()
            .structured(true)
            .capture_caller_info(true),
    );

    logger.info("who called");

    let record = &parse_lines(&console)[0];
    let file = record["file"].as_str().expect("caller recorded");
    assert!(file.contains("integration_tests.rs:"), "caller was {}", file);
}

#[test]
fn test_caller_capture_in_formatted_layout() {
    let (logger, console) = captured_logger(
        LoggerFacade::builder()
            .force_colors(false)
            .force_formatting(true)
            .capture_caller_info(true),
    );

    logger.with_fields(fields! { "k" => "v" }).info("who called");

    let line = &console.lines()[0];
    assert!(line.contains("who called k=v (") && line.ends_with(')'), "line was {}", line);
    assert!(line.contains("integration_tests.rs:"));
    assert!(!line.contains("file="));
}

#[test]
fn test_field_injection_prevention() {
    for force_formatting in [true, false] {
        let (logger, console) = captured_logger(
            LoggerFacade::builder()
                .force_colors(false)
                .force_formatting(force_formatting),
        );

        logger
            .with_fields(fields! { "user" => "bob\nERROR [2024] forged" })
            .info("login");
        logger
            .nested(fields! { "prefix" => "api\r\nINFO fake" })
            .info("request");

        let lines = console.lines();
        assert_eq!(lines.len(), 2, "records were {:?}", lines);
        assert!(lines[0].contains("bob\\nERROR [2024] forged"));
    }
}

#[test]
fn test_structured_message_keeps_control_characters() {
    let (logger, console) = structured_logger(Level::INFO);

    logger.info("first\nsecond");

    assert_eq!(console.lines().len(), 1);
    assert_eq!(parse_lines(&console)[0]["msg"], "first\nsecond");
}

#[test]
fn test_log_injection_prevention() {
    let (logger, console) = captured_logger(
        LoggerFacade::builder()
            .force_colors(false)
            .force_formatting(true),
    );

    logger.info("User login\nERROR [2024-10-17] Fake error injected\nINFO Continuation");

    let lines = console.lines();
    assert_eq!(lines.len(), 1, "Log should be a single line, not multiple");
    assert!(lines[0].contains("\\n"));
}

#[test]
fn test_independent_loggers_do_not_share_configuration() {
    let (quiet, quiet_console) = structured_logger(Level::ERROR);
    let (chatty, chatty_console) = structured_logger(Level::TRACE);

    quiet.info("dropped");
    chatty.info("kept");

    assert!(quiet_console.is_empty());
    assert_eq!(chatty_console.lines().len(), 1);
}

#[test]
fn test_loggers_as_trait_objects() {
    let (logger, console) = structured_logger(Level::INFO);

    let as_logger: &dyn Logger = &logger;
    as_logger.nested(fields! { "via" => "dyn" }).info("through trait");

    let as_controller: &dyn Controller = &logger;
    assert_eq!(as_controller.get_output().name(), "memory");

    assert_eq!(parse_lines(&console)[0]["via"], "dyn");
}

#[test]
fn test_config_from_json() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("from_json.log");
    let json = serde_json::json!({
        "enable_console": false,
        "file_location": log_file,
        "structured": true,
        "level": "debug",
    })
    .to_string();

    let config = Config::from_json_str(&json).expect("valid config");
    let logger = LoggerFacade::new(config).expect("Failed to build logger");
    logger.debug("configured from json");

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    let record: serde_json::Value = serde_json::from_str(content.trim()).expect("valid JSON");
    assert_eq!(record["level"], "debug");
}
