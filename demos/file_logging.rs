//! File logging example
//!
//! Demonstrates the unified backend writing one multiplexed record stream to
//! console and a rotating JSON log file at once.
//!
//! Run with: cargo run --example file_logging

use logfacade::prelude::*;
use logfacade::{infof, warnf, BackendKind};

fn main() -> Result<()> {
    println!("=== Logfacade - File Logging Example ===\n");

    let config = Configuration {
        unified_console: ConsoleConfig::enabled("info"),
        unified_file: FileConfig::enabled("application.log", "")
            .with_max_size_mb(10)
            .with_max_backups(3),
        ..Default::default()
    };
    logfacade::init(&config, BackendKind::Unified)?;

    println!("1. Logging to both console and file:");
    infof!("application started");
    infof!("configuration loaded successfully");
    warnf!("using default settings for some options");
    infof!("database connection established");

    println!("\n2. Performing some operations:");
    for i in 1..=5 {
        infof!("processing item {}/5", i);
        if i == 3 {
            warnf!("item 3 took longer than expected");
        }
    }
    infof!("all operations completed");

    logfacade::flush()?;

    println!("\n=== Example completed successfully! ===");
    println!("Check 'application.log' for the full log output");

    Ok(())
}
