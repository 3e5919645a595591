//! Autoplay timer.
//!
//! Holds at most one armed entry. Arming always replaces the previous entry, so a
//! superseded timer can never fire.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Armed {
    generation: u64,
    delay: Duration,
    elapsed: Duration,
}

#[derive(Debug, Default, Clone)]
pub struct AutoplayTimer {
    armed: Option<Armed>,
    generations: u64,
}

impl AutoplayTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel whatever is armed, then arm a fresh timer firing after `delay`.
    /// Returns the generation of the new timer.
    pub fn rearm(&mut self, delay: Duration) -> u64 {
        self.cancel();
        self.generations += 1;
        self.armed = Some(Armed {
            generation: self.generations,
            delay,
            elapsed: Duration::ZERO,
        });
        self.generations
    }

    pub fn cancel(&mut self) {
        self.armed = None;
    }

    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    /// Number of live timers; never more than one.
    pub fn live_count(&self) -> usize {
        usize::from(self.armed.is_some())
    }

    pub fn generation(&self) -> Option<u64> {
        self.armed.map(|a| a.generation)
    }

    pub fn delay(&self) -> Option<Duration> {
        self.armed.map(|a| a.delay)
    }

    /// Time left before the armed timer fires.
    pub fn remaining(&self) -> Option<Duration> {
        self.armed.map(|a| a.delay.saturating_sub(a.elapsed))
    }

    /// Let `dt` pass. Returns `true` if the timer fired; a fired timer restarts
    /// its interval with the same delay. Time beyond the firing point is dropped,
    /// callers that need it should split `dt` on [`AutoplayTimer::remaining`].
    pub fn advance(&mut self, dt: Duration) -> bool {
        let Some(armed) = self.armed.as_mut() else {
            return false;
        };
        armed.elapsed += dt;
        if armed.elapsed >= armed.delay {
            armed.elapsed = Duration::ZERO;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: fn(u64) -> Duration = Duration::from_millis;

    #[test]
    fn test_fires_after_delay_and_repeats() {
        let mut timer = AutoplayTimer::new();
        timer.rearm(MS(100));

        assert!(!timer.advance(MS(99)));
        assert!(timer.advance(MS(1)));
        assert_eq!(timer.remaining(), Some(MS(100)));
        assert!(!timer.advance(MS(50)));
        assert!(timer.advance(MS(50)));
    }

    #[test]
    fn test_rearm_supersedes_previous_timer() {
        let mut timer = AutoplayTimer::new();
        let first = timer.rearm(MS(100));
        timer.advance(MS(90));

        let second = timer.rearm(MS(300));
        assert_ne!(first, second);
        assert_eq!(timer.live_count(), 1);
        assert_eq!(timer.generation(), Some(second));

        // The stale timer would have fired here.
        assert!(!timer.advance(MS(20)));
        assert_eq!(timer.remaining(), Some(MS(280)));
    }

    #[test]
    fn test_cancelled_timer_never_fires() {
        let mut timer = AutoplayTimer::new();
        timer.rearm(MS(10));
        timer.cancel();
        assert!(!timer.is_armed());
        assert_eq!(timer.live_count(), 0);
        assert!(!timer.advance(MS(1000)));
    }
}
