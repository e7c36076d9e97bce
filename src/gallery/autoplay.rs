// SPDX-License-Identifier: MPL-2.0
//! Auto-play timer for the slideshow.
//!
//! The timer is a deadline rather than a spawned task: the application polls
//! it from its tick subscription with the current `Instant`. A single
//! `Option`-like state means there is never more than one armed timer, and
//! tests can drive it with synthetic instants.

use std::time::{Duration, Instant};

/// Armed state of the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    /// Fires at `deadline`, then re-arms one interval later.
    Running { deadline: Instant },
    Stopped,
}

/// Recurring advance timer with hover suppression.
#[derive(Debug, Clone)]
pub struct AutoPlay {
    interval: Duration,
    state: TimerState,
    /// While the pointer is over the slideshow no timer may be armed.
    hovered: bool,
}

impl AutoPlay {
    /// Creates a stopped timer.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            state: TimerState::Stopped,
            hovered: false,
        }
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    #[must_use]
    pub fn state(&self) -> TimerState {
        self.state
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        matches!(self.state, TimerState::Running { .. })
    }

    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Next firing instant, if armed.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        match self.state {
            TimerState::Running { deadline } => Some(deadline),
            TimerState::Stopped => None,
        }
    }

    /// Number of armed timers: always 0 or 1.
    #[must_use]
    pub fn armed_timers(&self) -> usize {
        usize::from(self.is_running())
    }

    /// Arms the timer one interval from `now`.
    ///
    /// No-op while already running (the existing countdown is kept) and while
    /// the pointer hovers the slideshow.
    pub fn start(&mut self, now: Instant) {
        if self.hovered || self.is_running() {
            return;
        }
        self.state = TimerState::Running {
            deadline: now + self.interval,
        };
    }

    /// Disarms the timer. No-op when already stopped.
    pub fn stop(&mut self) {
        self.state = TimerState::Stopped;
    }

    /// Re-bases the countdown on `now`.
    pub fn reset(&mut self, now: Instant) {
        self.stop();
        self.start(now);
    }

    /// Pointer entered (`true`) or left (`false`) the slideshow.
    pub fn set_hovered(&mut self, hovered: bool, now: Instant) {
        if hovered {
            self.hovered = true;
            self.stop();
        } else {
            self.hovered = false;
            self.start(now);
        }
    }

    /// Returns true when the deadline has passed, re-arming the timer one
    /// interval after `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.state {
            TimerState::Running { deadline } if now >= deadline => {
                self.state = TimerState::Running {
                    deadline: now + self.interval,
                };
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(5000);

    #[test]
    fn new_timer_is_stopped() {
        let timer = AutoPlay::new(INTERVAL);
        assert_eq!(timer.state(), TimerState::Stopped);
        assert_eq!(timer.armed_timers(), 0);
    }

    #[test]
    fn start_arms_one_interval_ahead() {
        let now = Instant::now();
        let mut timer = AutoPlay::new(INTERVAL);
        timer.start(now);
        assert_eq!(timer.deadline(), Some(now + INTERVAL));
    }

    #[test]
    fn double_start_keeps_single_timer_and_original_deadline() {
        let now = Instant::now();
        let mut timer = AutoPlay::new(INTERVAL);
        timer.start(now);
        timer.start(now + Duration::from_millis(1200));
        assert_eq!(timer.armed_timers(), 1);
        assert_eq!(timer.deadline(), Some(now + INTERVAL));
    }

    #[test]
    fn double_stop_leaves_no_timer() {
        let now = Instant::now();
        let mut timer = AutoPlay::new(INTERVAL);
        timer.start(now);
        timer.stop();
        timer.stop();
        assert_eq!(timer.armed_timers(), 0);
        assert!(!timer.poll(now + INTERVAL * 3));
    }

    #[test]
    fn poll_fires_once_per_interval() {
        let now = Instant::now();
        let mut timer = AutoPlay::new(INTERVAL);
        timer.start(now);

        assert!(!timer.poll(now + INTERVAL - Duration::from_millis(1)));
        assert!(timer.poll(now + INTERVAL));
        // Re-armed relative to the firing instant.
        assert!(!timer.poll(now + INTERVAL + Duration::from_millis(100)));
        assert!(timer.poll(now + INTERVAL * 2));
    }

    #[test]
    fn reset_rebases_countdown() {
        let now = Instant::now();
        let mut timer = AutoPlay::new(INTERVAL);
        timer.start(now);

        let manual = now + Duration::from_millis(4000);
        timer.reset(manual);

        assert!(!timer.poll(now + INTERVAL));
        assert!(!timer.poll(manual + INTERVAL - Duration::from_millis(1)));
        assert!(timer.poll(manual + INTERVAL));
    }

    #[test]
    fn hover_suppresses_start_and_reset() {
        let now = Instant::now();
        let mut timer = AutoPlay::new(INTERVAL);
        timer.start(now);

        timer.set_hovered(true, now);
        assert!(!timer.is_running());

        timer.start(now);
        timer.reset(now);
        assert!(!timer.is_running());
        assert!(!timer.poll(now + INTERVAL * 10));
    }

    #[test]
    fn hover_exit_resumes_with_fresh_countdown() {
        let now = Instant::now();
        let mut timer = AutoPlay::new(INTERVAL);
        timer.start(now);
        timer.set_hovered(true, now);

        let leave = now + Duration::from_secs(30);
        timer.set_hovered(false, leave);
        assert_eq!(timer.deadline(), Some(leave + INTERVAL));
    }
}
