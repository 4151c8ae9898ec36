// src/main.rs

use anyhow::Result;
use clap::Parser;
use stubbify::cli::Cli;
use stubbify::config::ConfigBuilder;
use stubbify::errors::Error;
use stubbify::run;
use stubbify::signal::setup_signal_handler;

fn main() -> Result<()> {
    // Initialize logging. Default to 'info' if RUST_LOG is not set.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                if cfg!(debug_assertions) {
                    "stubbify=debug".parse()?
                } else {
                    "stubbify=info".parse()?
                },
            ),
        )
        .init();

    log::info!("Starting stubbify v{}...", env!("CARGO_PKG_VERSION"));
    log::debug!("Raw arguments: {:?}", std::env::args().collect::<Vec<_>>());

    // --- Configuration & Execution ---
    let cli = Cli::parse();
    let config = ConfigBuilder::from_cli(cli).build()?;
    log::debug!("Configuration built successfully.");

    let token = setup_signal_handler()?;

    let stdout = std::io::stdout();
    let result = run(&config, &token, &mut stdout.lock());

    // --- Error Handling ---
    if let Err(e) = result {
        match e {
            Error::Interrupted => {
                eprintln!("\nOperation cancelled.");
                std::process::exit(130);
            }
            Error::NoFilesFound => {
                eprintln!("stubbify: No files found in the specified inputs.");
                return Ok(());
            }
            _ => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
