use anyhow::{Context, Result};
use clap::Parser;
use std::{fs::File, path::Path, sync::Mutex};
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod config;
mod tui;
mod utils;

use cli::Cli;

#[tokio::main]
async fn main() {
    // Leave the alternate screen before reporting a panic
    std::panic::set_hook(Box::new(|panic_info| {
        tui::reset_terminal();
        error!("Application panicked: {}", panic_info);
        std::process::exit(1);
    }));

    // Load environment variables from .env file
    if let Err(e) = dotenvy::dotenv() {
        // Don't error if .env file doesn't exist, just log it
        tracing::debug!("No .env file found or error loading it: {}", e);
    }

    let cli = Cli::parse();

    // Initialize logging/tracing
    if let Err(e) = init_logging(cli.debug, cli.print, cli.log_file.as_deref()) {
        eprintln!("Failed to initialize logging: {:#}", e);
        std::process::exit(1);
    }

    // Errors only reach the terminal through stderr logging unless a log file is used
    let logs_to_file = cli.log_file.is_some();
    if let Err(e) = cli.execute().await {
        error!("Application error: {:#}", e);
        if logs_to_file {
            eprintln!("Error: {:#}", e);
        }
        std::process::exit(1);
    }
}

/// Default filter directive; debug output never goes to a stderr that the viewer draws on
fn default_filter(debug: bool, print: bool, log_to_file: bool) -> &'static str {
    if debug && (print || log_to_file) {
        "commentview=debug"
    } else {
        "commentview=warn"
    }
}

fn init_logging(debug: bool, print: bool, log_file: Option<&Path>) -> Result<()> {
    let default_filter = default_filter(debug, print, log_file.is_some());
    if debug && default_filter != "commentview=debug" {
        eprintln!("Debug logging in the interactive viewer needs --log-file; using warn level");
    }
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    let registry = tracing_subscriber::registry().with(env_filter);
    let result = match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file: {}", path.display()))?;
            registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .try_init()
        }
        None => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init(),
    };

    result.map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        assert_eq!(default_filter(false, false, false), "commentview=warn");
        assert_eq!(default_filter(true, true, false), "commentview=debug");
        assert_eq!(default_filter(true, false, true), "commentview=debug");
        // Interactive viewer owns the screen stderr would write to
        assert_eq!(default_filter(true, false, false), "commentview=warn");
    }
}
