// src/signal.rs

//! Provides signal handling for graceful shutdown.

use crate::cancellation::CancellationToken;
use anyhow::{Context, Result};

/// Sets up a handler for Ctrl+C (SIGINT).
///
/// When the signal is caught the returned token is cancelled. Files already
/// being written are finished; files not yet started fail with
/// [`Error::Interrupted`](crate::errors::Error::Interrupted).
///
/// # Errors
/// Returns an error if the signal handler cannot be set.
pub fn setup_signal_handler() -> Result<CancellationToken> {
    let token = CancellationToken::new();
    let handler_token = token.clone();

    ctrlc::set_handler(move || {
        log::info!("Ctrl+C signal received, attempting graceful shutdown.");
        handler_token.cancel();
    })
    .context("Failed to set Ctrl+C signal handler")?;

    Ok(token)
}
