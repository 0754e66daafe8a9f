use chrono::{Local, NaiveDate, NaiveTime};

/// Trait for abstracting time operations, enabling testability
pub trait Clock: Send + Sync {
    /// Get the current Unix timestamp in milliseconds
    fn now_millis(&self) -> i64;

    /// Get the current local calendar date
    fn today(&self) -> NaiveDate;

    /// Get the current local time of day
    fn local_time(&self) -> NaiveTime;
}

/// System clock implementation using real time
#[derive(Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Local::now().timestamp_millis()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    fn local_time(&self) -> NaiveTime {
        Local::now().time()
    }
}
