//! Typewriter TUI entry point.
//!
//! # Usage
//!
//! ```bash
//! # Type two words once, then wait for q
//! typewriter-tui Hello World --cursor
//!
//! # Loop forever, logging pass completions to a file
//! typewriter-tui --loop Rust Tokio Ratatui --log-file typewriter.log
//! ```

use std::{fs::File, path::Path, sync::Mutex};

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use typewriter_core::FnHooks;
use typewriter_tui::{App, Args, Driver, Runtime, TerminalDriver};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    if let Some(path) = &args.log_file {
        init_logging(path, &args.log_level)?;
    }

    // Reject bad arguments before the terminal is touched
    let config = args.config();
    config.validate()?;

    tracing::info!(words = config.words.len(), looping = config.looping, "typewriter starting");

    let hooks = FnHooks::new()
        .with_on_loop(|loop_count| {
            tracing::info!(loop_count, "pass complete");
            Ok(())
        })
        .with_on_done(|| {
            tracing::info!("all words typed");
            Ok(())
        });

    let driver = TerminalDriver::new()?;
    let app = App::new(config, args.view_props(), Box::new(hooks), driver.now())?
        .with_exit_on_done(args.exit_on_done);

    let mut runtime = Runtime::new(driver, app);
    runtime.run().await?;

    tracing::info!("typewriter stopped");
    Ok(())
}

/// Send logs to `path`. The terminal is in raw mode on the alternate
/// screen, so nothing may be written to stdout or stderr.
fn init_logging(path: &Path, log_level: &str) -> std::io::Result<()> {
    let file = File::create(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .with(filter)
        .init();

    Ok(())
}
