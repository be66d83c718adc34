//! Timer-driven coalescing of change notifications.
//!
//! The debouncer holds no clock and no thread: callers pass `now` into every
//! transition. That keeps it deterministic under test.

use std::time::{Duration, Instant};

/// Quiet period after the last change before a rescan fires.
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebounceState {
    Idle,
    Pending { deadline: Instant },
    /// A recomputation is running. `dirty` records changes seen meanwhile.
    Recomputing { dirty: bool },
}

#[derive(Debug, Clone)]
pub struct Debouncer {
    quiet_period: Duration,
    state: DebounceState,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_QUIET_PERIOD)
    }
}

impl Debouncer {
    pub fn new(quiet_period: Duration) -> Self {
        Self {
            quiet_period,
            state: DebounceState::Idle,
        }
    }

    pub fn state(&self) -> DebounceState {
        self.state
    }

    pub fn quiet_period(&self) -> Duration {
        self.quiet_period
    }

    /// Record a change. Starts or extends the quiet period.
    pub fn notify(&mut self, now: Instant) {
        self.state = match self.state {
            DebounceState::Idle | DebounceState::Pending { .. } => DebounceState::Pending {
                deadline: now + self.quiet_period,
            },
            DebounceState::Recomputing { .. } => DebounceState::Recomputing { dirty: true },
        };
    }

    /// Returns `true` exactly once per quiet period that has elapsed; the
    /// caller must then recompute and call [`Debouncer::finish`].
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.state {
            DebounceState::Pending { deadline } if now >= deadline => {
                self.state = DebounceState::Recomputing { dirty: false };
                true
            }
            _ => false,
        }
    }

    /// Mark the recomputation done. Changes seen while it ran re-arm the timer.
    pub fn finish(&mut self, now: Instant) {
        if let DebounceState::Recomputing { dirty } = self.state {
            self.state = if dirty {
                DebounceState::Pending {
                    deadline: now + self.quiet_period,
                }
            } else {
                DebounceState::Idle
            };
        }
    }

    /// When the next [`Debouncer::poll`] could fire, if anything is pending.
    pub fn next_deadline(&self) -> Option<Instant> {
        match self.state {
            DebounceState::Pending { deadline } => Some(deadline),
            _ => None,
        }
    }

    /// Time to wait before polling again, saturating at zero.
    pub fn time_until_deadline(&self, now: Instant) -> Option<Duration> {
        self.next_deadline()
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_burst_coalesces_to_one_fire() {
        let start = Instant::now();
        let mut d = Debouncer::default();
        let mut fires = 0;

        for i in 0..5 {
            d.notify(start + ms(i * 25));
            if d.poll(start + ms(i * 25)) {
                fires += 1;
            }
        }
        // Last notify at 100ms, so nothing fires before 600ms.
        assert!(!d.poll(start + ms(599)));
        if d.poll(start + ms(600)) {
            fires += 1;
            d.finish(start + ms(610));
        }
        assert!(!d.poll(start + ms(2000)));
        assert_eq!(fires, 1);
        assert_eq!(d.state(), DebounceState::Idle);
    }

    #[test]
    fn test_idle_never_fires() {
        let mut d = Debouncer::default();
        assert!(!d.poll(Instant::now() + ms(10_000)));
        assert_eq!(d.next_deadline(), None);
    }

    #[test]
    fn test_notify_during_recompute_rearms() {
        let start = Instant::now();
        let mut d = Debouncer::new(ms(100));
        d.notify(start);
        assert!(d.poll(start + ms(100)));

        d.notify(start + ms(120));
        // Still recomputing; no second fire yet.
        assert!(!d.poll(start + ms(500)));

        d.finish(start + ms(150));
        assert_eq!(d.next_deadline(), Some(start + ms(250)));
        assert!(d.poll(start + ms(250)));
        d.finish(start + ms(260));
        assert_eq!(d.state(), DebounceState::Idle);
    }

    #[test]
    fn test_time_until_deadline_saturates() {
        let start = Instant::now();
        let mut d = Debouncer::new(ms(100));
        d.notify(start);
        assert_eq!(d.time_until_deadline(start + ms(40)), Some(ms(60)));
        assert_eq!(d.time_until_deadline(start + ms(400)), Some(Duration::ZERO));
    }
}
