pub mod arithmetic;
pub mod calendar;
pub mod clock;
pub mod lenient;

pub use arithmetic::{
    divide_time, sum_durations, time_percentage, time_to_minutes, time_to_seconds,
    timestamp_to_minutes,
};
pub use clock::{ClockDuration, format_hm, format_hms, parse_hms};
pub use lenient::{ErrorSink, Lenient, TracingSink};
