//! Basic facade usage example
//!
//! Demonstrates initializing the tee backend with a console sink and logging
//! through the global macros.
//!
//! Run with: cargo run --example basic_usage

use logfacade::prelude::*;
use logfacade::{debugf, errorf, fields, infof, warnf, BackendKind};

fn main() -> Result<()> {
    println!("=== Logfacade - Basic Usage Example ===\n");

    // Console sink only, text format, everything from debug up
    let config = Configuration {
        tee_console: ConsoleConfig::enabled("debug"),
        ..Default::default()
    };
    logfacade::init(&config, BackendKind::Tee)?;

    println!("1. Logging at different levels:");
    debugf!("this is a debug message");
    infof!("this is an info message");
    warnf!("this is a warning message");
    errorf!("this is an error message");

    println!("\n2. Field-scoped logging:");
    let request_log = logfacade::with_fields(fields! {
        "request_id" => "r-42",
        "client" => "10.0.0.7",
    });
    infof!(request_log, "request accepted");
    warnf!(request_log, "response took {}ms", 350);

    // Derived loggers layer fields without touching their parent
    let retry_log = request_log.with_fields(fields! { "attempt" => 2 });
    infof!(retry_log, "retrying upstream call");
    infof!(request_log, "request finished");

    logfacade::flush()?;
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
