//! Simulated request latency and busy tracking
//!
//! The in-memory services emulate a remote backend: every operation runs its
//! body immediately and then waits for a delay chosen by a [`LatencyStrategy`]
//! before handing back the result. Production wiring uses [`FixedLatency`];
//! tests inject [`NoLatency`] so they run deterministically and fast.
//!
//! ```rust,ignore
//! let latency: SharedLatency = Arc::new(FixedLatency::demo());
//! let _busy = indicator.begin();
//! settle(&latency, OperationKind::Read).await;
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Kinds of simulated requests, each with its own delay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    /// Credential check
    Authenticate,
    /// Collection listing
    List,
    /// Single-record lookup
    Read,
    /// Create or update
    Write,
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OperationKind::Authenticate => "authenticate",
            OperationKind::List => "list",
            OperationKind::Read => "read",
            OperationKind::Write => "write",
        };
        f.write_str(name)
    }
}

/// Chooses how long a simulated request takes
pub trait LatencyStrategy: Send + Sync + fmt::Debug {
    /// Returns the delay for an operation kind
    fn delay_for(&self, kind: OperationKind) -> Duration;
}

/// Latency strategy shared between services
pub type SharedLatency = Arc<dyn LatencyStrategy>;

/// Completes immediately
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLatency;

impl LatencyStrategy for NoLatency {
    fn delay_for(&self, _kind: OperationKind) -> Duration {
        Duration::ZERO
    }
}

/// Fixed delay per operation kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedLatency {
    pub authenticate: Duration,
    pub list: Duration,
    pub read: Duration,
    pub write: Duration,
}

impl FixedLatency {
    /// The delays of the demo backend: 500ms for single reads, 800ms otherwise
    pub fn demo() -> Self {
        Self {
            authenticate: Duration::from_millis(800),
            list: Duration::from_millis(800),
            read: Duration::from_millis(500),
            write: Duration::from_millis(800),
        }
    }

    /// Builds a profile from millisecond values; listings share the write delay
    pub fn from_millis(read_ms: u64, write_ms: u64, auth_ms: u64) -> Self {
        Self {
            authenticate: Duration::from_millis(auth_ms),
            list: Duration::from_millis(write_ms),
            read: Duration::from_millis(read_ms),
            write: Duration::from_millis(write_ms),
        }
    }
}

impl Default for FixedLatency {
    fn default() -> Self {
        Self::demo()
    }
}

impl LatencyStrategy for FixedLatency {
    fn delay_for(&self, kind: OperationKind) -> Duration {
        match kind {
            OperationKind::Authenticate => self.authenticate,
            OperationKind::List => self.list,
            OperationKind::Read => self.read,
            OperationKind::Write => self.write,
        }
    }
}

/// Waits out the simulated latency for an operation
pub async fn settle(latency: &SharedLatency, kind: OperationKind) {
    let delay = latency.delay_for(kind);
    if !delay.is_zero() {
        tracing::trace!(operation = %kind, delay_ms = delay.as_millis() as u64, "Simulating latency");
        tokio::time::sleep(delay).await;
    }
}

/// Tracks whether a service has operations in flight
///
/// Counts in-flight operations rather than holding a single flag, so one
/// completion does not clear the indicator while another call is pending.
#[derive(Debug, Clone, Default)]
pub struct BusyIndicator {
    in_flight: Arc<AtomicUsize>,
}

impl BusyIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks an operation as started; it ends when the guard is dropped
    pub fn begin(&self) -> BusyGuard {
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        BusyGuard {
            in_flight: Arc::clone(&self.in_flight),
        }
    }

    /// True while at least one operation is in flight
    pub fn is_busy(&self) -> bool {
        self.in_flight() > 0
    }

    /// Number of operations currently in flight
    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }
}

/// Ends a busy period on drop
#[derive(Debug)]
pub struct BusyGuard {
    in_flight: Arc<AtomicUsize>,
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}
