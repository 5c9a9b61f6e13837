//! Basic facade usage example
//!
//! Demonstrates console and file targets, structured output, per-record
//! fields, nested loggers and output redirection.
//!
//! Run with: cargo run --example basic_usage

use rust_logger_adapter::prelude::*;
use rust_logger_adapter::info;
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== Rust Logger Adapter - Basic Usage Example ===\n");

    // Default configuration: prefixed text on stderr at info level
    println!("1. Default console logger:");
    let logger = LoggerFacade::new(Config::default())?;
    logger.debug("Debug message (hidden)");
    logger.info("Info message (visible)");
    logger.warn("Warning message (visible)");

    println!("\n2. Fields and nested loggers:");
    logger
        .with_fields(fields! { "user" => "alice", "attempt" => 2 })
        .info("login succeeded");
    let request = logger.nested(fields! { "req" => "123", "prefix" => "api" });
    info!(request, "handled in {}ms", 42);
    request.with_fields(fields! { "status" => 500 }).error("upstream failed");

    println!("\n3. Structured output to console and file:");
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("app.log");
    let json = LoggerFacade::builder()
        .structured(true)
        .level(Level::DEBUG)
        .capture_caller_info(true)
        .file_location(&path)
        .build()?;
    json.debug("written to both targets");
    json.flush()?;
    println!("   {} contains:", path.display());
    print!("   {}", std::fs::read_to_string(&path)?);

    println!("\n4. Redirecting output:");
    let captured = Arc::new(MemorySink::new());
    json.set_output(captured.clone());
    json.info("captured in memory");
    print!("   {}", captured.contents());

    println!("\n5. Invalid configuration:");
    match LoggerFacade::builder().level("loud").build() {
        Ok(_) => println!("   unexpected success"),
        Err(e) => println!("   rejected: {}", e),
    }

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
