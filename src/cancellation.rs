//! Provides a token-based mechanism for graceful cancellation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A cloneable, thread-safe flag that tells in-flight work to stop.
///
/// Discovery checks it per directory entry and processing checks it before
/// each file, so a cancelled batch stops between files, never mid-file.
///
/// # Examples
///
/// ```
/// use stubbify::CancellationToken;
///
/// let token = CancellationToken::new();
/// let worker_view = token.clone();
/// assert!(!worker_view.is_cancelled());
///
/// token.cancel();
/// assert!(worker_view.is_cancelled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    inner: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Creates a token in the non-cancelled state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Signals cancellation to this token and all of its clones.
    pub fn cancel(&self) {
        self.inner.store(true, Ordering::SeqCst);
    }

    /// Returns `true` once `cancel()` has been called on any clone.
    pub fn is_cancelled(&self) -> bool {
        self.inner.load(Ordering::Relaxed)
    }
}
