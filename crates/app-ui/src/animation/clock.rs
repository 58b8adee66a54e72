use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

static NEXT_CLOCK_ID: AtomicU64 = AtomicU64::new(1);

/// Identifier used to tell clocks apart in logs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClockId(u64);

impl fmt::Display for ClockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "clock-{}", self.0)
    }
}

/// Frame clock driving a tween
///
/// The frame scheduler pushes timestamps in with [`Clock::advance_to`]; a
/// clock only tells its tween the current time and whether it is running.
#[derive(Debug)]
pub struct Clock {
    id: ClockId,
    running: bool,
    now: Duration,
}

impl Clock {
    /// Create a stopped clock at time zero
    pub fn new() -> Self {
        Self {
            id: ClockId(NEXT_CLOCK_ID.fetch_add(1, Ordering::Relaxed)),
            running: false,
            now: Duration::ZERO,
        }
    }

    /// Clock identifier
    pub fn id(&self) -> ClockId {
        self.id
    }

    /// Start the clock
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Stop the clock
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Whether the clock is running
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Current frame timestamp
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Move to a new frame timestamp; timestamps never go backwards
    pub fn advance_to(&mut self, timestamp: Duration) {
        self.now = self.now.max(timestamp);
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}
