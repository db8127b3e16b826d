use std::time::{Duration, Instant};

/// Tick period used when none is configured.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(30);

/// Tick timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct TickTime {
    /// Monotonic tick counter, starting at 0.
    pub index: u64,

    /// Monotonic timestamp taken when the tick was released.
    pub now: Instant,

    /// How far past its deadline the tick was released.
    pub late: Duration,
}

/// Paces a loop to one tick per `period`.
///
/// Ticks never overlap: the caller runs a tick to completion before calling
/// [`wait`](Self::wait) again. A tick that overruns the period releases the
/// next one immediately and rebases the schedule, so a long stall never
/// produces a burst of catch-up ticks.
#[derive(Debug, Clone)]
pub struct TickClock {
    period: Duration,
    next: Instant,
    index: u64,
}

impl TickClock {
    /// Creates a clock whose first tick is due immediately.
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next: Instant::now(),
            index: 0,
        }
    }

    #[inline]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Number of ticks released so far.
    #[inline]
    pub fn ticks(&self) -> u64 {
        self.index
    }

    /// Makes the next tick due now.
    pub fn reset(&mut self) {
        self.next = Instant::now();
    }

    /// Blocks until the next tick is due and returns its timing.
    pub fn wait(&mut self) -> TickTime {
        let now = Instant::now();
        if let Some(remaining) = self.next.checked_duration_since(now) {
            if !remaining.is_zero() {
                std::thread::sleep(remaining);
            }
        }

        let now = Instant::now();
        let late = now.saturating_duration_since(self.next);

        // Behind by more than a period: rebase instead of bursting.
        self.next = if late >= self.period {
            now + self.period
        } else {
            self.next + self.period
        };

        let tt = TickTime { index: self.index, now, late };
        self.index = self.index.wrapping_add(1);
        tt
    }
}

impl Default for TickClock {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_INTERVAL)
    }
}
