use std::ops::Add;
use std::time::{Duration, Instant};

/// upper limit of time steps handed out by a single poll; older backlog is dropped
pub const MAX_CATCH_UP_TICKS: u32 = 8;

/// Fixed-period timer, polled by the driving loop.
/// A stopped clock never reports due time steps.
#[derive(Clone, Debug)]
pub struct TickClock {
    period: Duration,
    next_step_time: Option<Instant>,
}

impl TickClock {
    pub fn new(period: Duration) -> Self {
        assert!(!period.is_zero());
        Self {
            period,
            next_step_time: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_running(&self) -> bool {
        self.next_step_time.is_some()
    }

    /// first time step becomes due one period after `now`
    pub fn start(&mut self, now: Instant) {
        self.next_step_time = Some(now.add(self.period));
    }

    pub fn stop(&mut self) {
        self.next_step_time = None;
    }

    /// Number of time steps which became due until `now`. Consumes them.
    pub fn due_ticks(&mut self, now: Instant) -> u32 {
        let Some(mut next_step_time) = self.next_step_time else {
            return 0;
        };

        let mut ticks = 0;
        while now.ge(&next_step_time) && ticks < MAX_CATCH_UP_TICKS {
            next_step_time = next_step_time.add(self.period);
            ticks += 1;
        }
        if now.ge(&next_step_time) {
            log::debug!("falling behind - dropping {:?} of pending time steps", now - next_step_time);
            next_step_time = now.add(self.period);
        }

        self.next_step_time = Some(next_step_time);
        ticks
    }

    /// time left until the next step is due; `None` when stopped
    pub fn time_until_next_tick(&self, now: Instant) -> Option<Duration> {
        self.next_step_time.map(|t| t.saturating_duration_since(now))
    }
}
