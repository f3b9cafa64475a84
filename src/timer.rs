use std::time::Duration;

use log::debug;

use crate::state::TimerState;

// Elapsed time is fed in by the host frame loop
#[derive(Debug)]
struct TimerHandle {
    period: Duration,
    elapsed: Duration,
}

/// Autoplay timer owning at most one handle; `start` never replaces a live one.
#[derive(Debug, Default)]
pub struct AutoplayTimer {
    handle: Option<TimerHandle>,
}

impl AutoplayTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> TimerState {
        if self.handle.is_some() {
            TimerState::Running
        } else {
            TimerState::Stopped
        }
    }

    pub fn period(&self) -> Option<Duration> {
        self.handle.as_ref().map(|h| h.period)
    }

    pub fn remaining(&self) -> Option<Duration> {
        self.handle
            .as_ref()
            .map(|h| h.period.saturating_sub(h.elapsed))
    }

    /// Creates a timer unless one already exists. Returns `true` if a timer
    /// was created.
    pub fn start(&mut self, period: Duration) -> bool {
        if self.handle.is_some() {
            return false;
        }
        debug!("Autoplay timer started ({} ms)", period.as_millis());
        self.handle = Some(TimerHandle {
            period,
            elapsed: Duration::ZERO,
        });
        true
    }

    /// Cancels the live timer. Returns `true` if one was running.
    pub fn stop(&mut self) -> bool {
        match self.handle.take() {
            Some(_) => {
                debug!("Autoplay timer stopped");
                true
            }
            None => false,
        }
    }

    pub fn reset(&mut self, period: Duration, enabled: bool) {
        self.stop();
        if enabled {
            self.start(period);
        }
    }

    /// Accumulates `elapsed` and reports whether the timer fired. Overshoot
    /// carries into the next period.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        let Some(handle) = self.handle.as_mut() else {
            return false;
        };
        handle.elapsed += elapsed;
        if handle.elapsed >= handle.period {
            handle.elapsed -= handle.period;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: Duration = Duration::from_millis(3000);

    #[test]
    fn start_is_guarded_by_presence() {
        let mut timer = AutoplayTimer::new();
        assert_eq!(timer.state(), TimerState::Stopped);
        assert!(timer.start(PERIOD));
        assert!(!timer.start(Duration::from_millis(10)));
        assert_eq!(timer.period(), Some(PERIOD));
        assert_eq!(timer.state(), TimerState::Running);
    }

    #[test]
    fn stop_is_idempotent() {
        let mut timer = AutoplayTimer::new();
        assert!(!timer.stop());
        timer.start(PERIOD);
        assert!(timer.stop());
        assert!(!timer.stop());
        assert!(!timer.advance(PERIOD));
    }

    #[test]
    fn fires_once_per_full_period() {
        let mut timer = AutoplayTimer::new();
        timer.start(PERIOD);
        assert!(!timer.advance(Duration::from_millis(2999)));
        assert!(timer.advance(Duration::from_millis(1)));
        assert!(!timer.advance(Duration::from_millis(1000)));
        assert_eq!(timer.remaining(), Some(Duration::from_millis(2000)));
    }

    #[test]
    fn reset_restarts_a_full_period_only_when_enabled() {
        let mut timer = AutoplayTimer::new();
        timer.start(PERIOD);
        timer.advance(Duration::from_millis(2500));

        timer.reset(PERIOD, true);
        assert_eq!(timer.remaining(), Some(PERIOD));

        timer.reset(PERIOD, false);
        assert_eq!(timer.state(), TimerState::Stopped);
    }

    #[test]
    fn reset_picks_up_a_new_period() {
        let mut timer = AutoplayTimer::new();
        timer.start(PERIOD);
        timer.reset(Duration::from_millis(500), true);
        assert!(!timer.advance(Duration::from_millis(499)));
        assert!(timer.advance(Duration::from_millis(1)));
    }
}
