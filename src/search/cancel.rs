//! Cooperative cancellation for long searches.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared cancellation flag.
///
/// Clones share the same flag. A search checks it once per node expansion
/// and stops with `SearchError::Cancelled` once it is raised.
#[derive(Clone, Debug, Default)]
pub struct CancelFlag {
    raised: Arc<AtomicBool>,
}

impl CancelFlag {
    /// Create a new, lowered flag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask every search holding this flag to stop.
    pub fn cancel(&self) {
        self.raised.store(true, Ordering::Relaxed);
    }

    /// Has cancellation been requested?
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.raised.load(Ordering::Relaxed)
    }

    /// Lower the flag so it can be reused for another search.
    pub fn reset(&self) {
        self.raised.store(false, Ordering::Relaxed);
    }
}
