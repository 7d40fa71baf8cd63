//! Outbound (Driven) ports for the material ledger.

use shared_types::Timestamp;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

/// Clock used to stamp `created_at` / `updated_at`.
///
/// The service reads it while holding its write lock, so stamps follow
/// commit order as long as the clock does not run backwards.
pub trait TimeSource: Send + Sync {
    /// Milliseconds since the Unix epoch.
    fn now(&self) -> Timestamp;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> Timestamp {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as Timestamp)
            .unwrap_or(0)
    }
}

/// Hand-driven clock.
///
/// Clones share one reading, so a test can keep a handle and advance the
/// clock of a service that owns another.
#[derive(Debug, Clone, Default)]
pub struct MockTimeSource {
    millis: Arc<AtomicU64>,
}

impl MockTimeSource {
    pub fn new(initial: Timestamp) -> Self {
        Self {
            millis: Arc::new(AtomicU64::new(initial)),
        }
    }

    /// Moves the shared reading forward by `ms`.
    pub fn advance(&self, ms: u64) {
        self.millis.fetch_add(ms, Ordering::SeqCst);
    }
}

impl TimeSource for MockTimeSource {
    fn now(&self) -> Timestamp {
        self.millis.load(Ordering::SeqCst)
    }
}
