//! File logging example
//!
//! Demonstrates routing one stream of records to console, text file and
//! JSON-lines file filters, each with its own threshold.
//!
//! Run with: cargo run --example file_logging

use filter_logger::prelude::*;
use filter_logger::warn;

fn main() -> Result<()> {
    println!("=== Filter Logger - File Logging Example ===\n");

    let logger = Logger::builder()
        .filter("stdout", Level::INFO, ConsoleSink::new())
        .filter("file", Level::FINEST, FileSink::new("application.log")?)
        .filter("json", Level::WARNING, FileSink::json("application.jsonl")?)
        .build();

    println!("1. Logging to console and files:");

    logger.info("Application started");
    logger.debug("Loading configuration...");
    logger.info("Configuration loaded successfully");
    logger.warn("Using default settings for some options");
    logger.info("Connecting to database...");
    logger.info("Database connection established");
    logger.error("Failed to load optional plugin");
    logger.info("Application initialization complete");

    println!("\n2. Performing some operations:");

    for i in 1..=5 {
        logger.info(format!("Processing item {}/5", i));
        if i == 3 {
            warn!(logger, "Item {} took longer than expected", i);
        }
    }

    logger.info("All operations completed");

    let metrics = logger.metrics();
    println!(
        "\n   dispatched={} delivered={} failures={}",
        metrics.dispatched(),
        metrics.delivered(),
        metrics.sink_failures()
    );

    // Closing flushes both files
    logger.close();

    println!("\n=== Example completed successfully! ===");
    println!("Check 'application.log' and 'application.jsonl' for the output");

    Ok(())
}
