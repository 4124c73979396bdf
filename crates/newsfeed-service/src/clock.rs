use chrono::{Local, Timelike};

use crate::timestamp::Timestamp;

/// Source of "now" for visibility checks.
pub trait Clock: Send + Sync + 'static {
    fn now(&self) -> Timestamp;
}

/// Local wall-clock time, truncated to whole seconds.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        let now = Local::now().naive_local();
        now.with_nanosecond(0).unwrap_or(now).into()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub Timestamp);

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.0
    }
}
