use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Zero sentinel for `HH:MM` results
pub const ZERO_HM: &str = "00:00";
/// Zero sentinel for `HH:MM:SS` values
pub const ZERO_HMS: &str = "00:00:00";

pub const SECONDS_PER_MINUTE: u64 = 60;
pub const SECONDS_PER_HOUR: u64 = 3600;

/// Shapes accepted for a seconds-precision clock value.
///
/// The two-field short form is read as minutes and seconds: `"5:07"` is
/// treated as `"00:5:07"`, not as five hours and seven minutes. Callers
/// that hold hours:minutes text should use [`parse_hm_minutes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockText {
    MinutesSeconds { minutes: u64, seconds: u64 },
    HoursMinutesSeconds { hours: u64, minutes: u64, seconds: u64 },
}

impl ClockText {
    pub fn parse(input: &str) -> Result<Self> {
        let text = input.trim();
        let fields: Vec<&str> = text.split(':').collect();

        match fields.as_slice() {
            [minutes, seconds] => {
                // Short form is 1-2 digits then exactly 2 digits
                if !(1..=2).contains(&minutes.len()) || seconds.len() != 2 {
                    return Err(Error::format(
                        input,
                        "short form must look like M:SS or MM:SS",
                    ));
                }
                Ok(ClockText::MinutesSeconds {
                    minutes: parse_field(input, minutes)?,
                    seconds: parse_field(input, seconds)?,
                })
            }
            [hours, minutes, seconds] => Ok(ClockText::HoursMinutesSeconds {
                hours: parse_field(input, hours)?,
                minutes: parse_field(input, minutes)?,
                seconds: parse_field(input, seconds)?,
            }),
            _ => Err(Error::format(
                input,
                format!("expected 2 or 3 ':'-separated fields, found {}", fields.len()),
            )),
        }
    }

    pub fn total_seconds(self) -> Result<u64> {
        let (hours, minutes, seconds) = match self {
            ClockText::MinutesSeconds { minutes, seconds } => (0, minutes, seconds),
            ClockText::HoursMinutesSeconds {
                hours,
                minutes,
                seconds,
            } => (hours, minutes, seconds),
        };

        hours
            .checked_mul(SECONDS_PER_HOUR)
            .and_then(|h| minutes.checked_mul(SECONDS_PER_MINUTE).map(|m| (h, m)))
            .and_then(|(h, m)| h.checked_add(m))
            .and_then(|hm| hm.checked_add(seconds))
            .ok_or_else(|| Error::format(&self.to_string(), "duration is too large"))
    }
}

impl fmt::Display for ClockText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClockText::MinutesSeconds { minutes, seconds } => {
                write!(f, "00:{:02}:{:02}", minutes, seconds)
            }
            ClockText::HoursMinutesSeconds {
                hours,
                minutes,
                seconds,
            } => write!(f, "{:02}:{:02}:{:02}", hours, minutes, seconds),
        }
    }
}

/// A non-negative duration held as whole seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ClockDuration(u64);

impl ClockDuration {
    pub const ZERO: ClockDuration = ClockDuration(0);

    pub fn from_secs(secs: u64) -> Self {
        ClockDuration(secs)
    }

    pub fn as_secs(self) -> u64 {
        self.0
    }

    /// Whole minutes, remainder dropped
    pub fn as_minutes(self) -> u64 {
        self.0 / SECONDS_PER_MINUTE
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl FromStr for ClockDuration {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ClockText::parse(s)?.total_seconds().map(ClockDuration)
    }
}

impl fmt::Display for ClockDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = self.0;
        write!(
            f,
            "{:02}:{:02}:{:02}",
            secs / SECONDS_PER_HOUR,
            (secs / SECONDS_PER_MINUTE) % 60,
            secs % SECONDS_PER_MINUTE
        )
    }
}

/// Parse `HH:MM:SS` (or the `M:SS` short form) into total seconds.
pub fn parse_hms(duration: &str) -> Result<u64> {
    duration.parse::<ClockDuration>().map(ClockDuration::as_secs)
}

/// Parse `H:MM` hours:minutes text into total minutes.
pub fn parse_hm_minutes(duration: &str) -> Result<u64> {
    let text = duration.trim();
    let (hours, minutes) = text
        .split_once(':')
        .ok_or_else(|| Error::format(duration, "expected H:MM"))?;
    if minutes.contains(':') {
        return Err(Error::format(duration, "expected exactly 2 fields"));
    }

    let hours = parse_field(duration, hours)?;
    let minutes = parse_field(duration, minutes)?;

    hours
        .checked_mul(60)
        .and_then(|h| h.checked_add(minutes))
        .ok_or_else(|| Error::format(duration, "duration is too large"))
}

/// Render seconds as `HH:MM:SS`
pub fn format_hms(secs: u64) -> String {
    ClockDuration::from_secs(secs).to_string()
}

/// Render minutes as `HH:MM`
pub fn format_hm(minutes: u64) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

fn parse_field(input: &str, field: &str) -> Result<u64> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::format(
            input,
            format!("field '{}' is not a whole number", field),
        ));
    }
    field
        .parse()
        .map_err(|_| Error::format(input, format!("field '{}' is out of range", field)))
}
