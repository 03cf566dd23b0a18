//! Basic logger usage example
//!
//! Demonstrates console filters, thresholds, unnamed levels and the global logger.
//!
//! Run with: cargo run --example basic_usage

use filter_logger::prelude::*;
use filter_logger::{info, logf};

fn main() -> Result<()> {
    println!("=== Filter Logger - Basic Usage Example ===\n");

    // One console filter that lets everything through
    let logger = Logger::new();
    logger.add_filter("stdout", Level::FINEST, ConsoleSink::new());

    println!("1. Logging at every level:");
    logger.finest("This is a finest message");
    logger.fine("This is a fine message");
    logger.debug("This is a debug message");
    logger.trace("This is a trace message");
    logger.info("This is an info message");
    logger.warn("This is a warning message");
    logger.error("This is an error message");
    logger.critical("This is a critical message");
    logf!(logger, 999, "Unnamed level {} still sorts above CRITICAL", 999);

    println!("\n2. Replacing the filter with a higher threshold:");
    logger.add_filter("stdout", Level::INFO, ConsoleSink::with_colors(false));
    println!("   Threshold set to INFO - finest through trace won't show:");
    logger.fine("Fine message (hidden)");
    logger.debug("Debug message (hidden)");
    logger.info("Info message (visible)");
    logger.warn("Warning message (visible)");

    println!("\n3. Compact output alongside the text filter:");
    logger.add_filter(
        "compact",
        Level::WARNING,
        ConsoleSink::new().with_output_format(OutputFormat::Compact),
    );
    logger.error("Shown twice, once per filter");
    logger.close();

    println!("\n4. The global logger:");
    info!("Global logger prints DEBUG and above: {} {}", "hello", "world");
    filter_logger::debug("So does the free function");
    filter_logger::close();

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
