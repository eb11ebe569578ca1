//! Non-failing duration helpers.
//!
//! [`Lenient`] wraps each checked operation: on error it hands the
//! condition to an [`ErrorSink`] and returns the operation's default
//! (`"00:00"`, `"00:00:00"` or `0`).

use super::arithmetic;
use super::clock::{ZERO_HM, ZERO_HMS};
use crate::error::Error;

/// Receives errors swallowed by a [`Lenient`] call.
pub trait ErrorSink {
    fn report(&self, operation: &'static str, error: &Error);
}

/// Logs swallowed errors through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl ErrorSink for TracingSink {
    fn report(&self, operation: &'static str, error: &Error) {
        tracing::error!(operation, %error, "falling back to default value");
    }
}

impl<F> ErrorSink for F
where
    F: Fn(&'static str, &Error),
{
    fn report(&self, operation: &'static str, error: &Error) {
        self(operation, error)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Lenient<S = TracingSink> {
    sink: S,
}

impl Lenient<TracingSink> {
    pub fn new() -> Self {
        Self { sink: TracingSink }
    }
}

impl<S: ErrorSink> Lenient<S> {
    pub fn with_sink(sink: S) -> Self {
        Self { sink }
    }

    fn or_default<T>(&self, operation: &'static str, result: Result<T, Error>, default: T) -> T {
        match result {
            Ok(value) => value,
            Err(e) => {
                self.sink.report(operation, &e);
                default
            }
        }
    }

    pub fn sum_durations<I, T>(&self, durations: I) -> String
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        self.or_default(
            "sum_durations",
            arithmetic::sum_durations(durations),
            ZERO_HM.to_string(),
        )
    }

    pub fn time_percentage(&self, total: &str, used: &str) -> u64 {
        self.or_default(
            "time_percentage",
            arithmetic::time_percentage(total, used),
            0,
        )
    }

    pub fn divide_time(&self, time: &str, count: u64) -> String {
        self.or_default(
            "divide_time",
            arithmetic::divide_time(time, count),
            ZERO_HMS.to_string(),
        )
    }

    pub fn time_to_seconds(&self, time: &str) -> u64 {
        self.or_default("time_to_seconds", arithmetic::time_to_seconds(time), 0)
    }

    pub fn time_to_minutes(&self, time: &str) -> u64 {
        self.or_default("time_to_minutes", arithmetic::time_to_minutes(time), 0)
    }

    pub fn timestamp_to_minutes(&self, time: &str) -> u64 {
        self.or_default(
            "timestamp_to_minutes",
            arithmetic::timestamp_to_minutes(time),
            0,
        )
    }
}
