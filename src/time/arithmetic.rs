//! Checked arithmetic over clock-duration text.
//!
//! Every operation here returns [`crate::error::Result`]; see
//! [`super::lenient`] for the variants that fall back to a default value.

use super::clock::{ZERO_HM, ZERO_HMS, format_hm, format_hms, parse_hm_minutes, parse_hms};
use crate::error::{Error, Result};
use tracing::debug;

/// `true` for the literal `"00:00:00"` zero sentinel.
pub fn is_zero_sentinel(time: &str) -> bool {
    time.trim() == ZERO_HMS
}

/// Sum `H:MM` entries into an `HH:MM` total. Empty entries are skipped.
pub fn sum_durations<I, S>(durations: I) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut total_minutes: u64 = 0;
    let mut counted = 0usize;

    for entry in durations {
        let entry = entry.as_ref();
        if entry.is_empty() {
            continue;
        }
        let minutes = parse_hm_minutes(entry)?;
        total_minutes = total_minutes
            .checked_add(minutes)
            .ok_or_else(|| Error::format(entry, "sum of durations is too large"))?;
        counted += 1;
    }

    if counted == 0 {
        return Ok(ZERO_HM.to_string());
    }

    debug!(entries = counted, total_minutes, "summed durations");
    Ok(format_hm(total_minutes))
}

/// Share of `total` taken by `used`, as a rounded whole percentage.
///
/// Values above 100 are returned as-is.
pub fn time_percentage(total: &str, used: &str) -> Result<u64> {
    if is_zero_sentinel(used) {
        return Ok(0);
    }

    let total_secs = parse_hms(total)?;
    let used_secs = parse_hms(used)?;

    if used_secs == 0 {
        return Ok(0);
    }
    if total_secs == 0 {
        return Err(Error::DivisionByZero(format!(
            "total time '{}' is zero while used time '{}' is not",
            total, used
        )));
    }

    let total_secs = u128::from(total_secs);
    let scaled = u128::from(used_secs) * 100;
    // round half up
    let percent = (scaled * 2 + total_secs) / (total_secs * 2);

    u64::try_from(percent).map_err(|_| Error::format(used, "percentage is out of range"))
}

/// Split `time` into `count` equal parts, rounded to the nearest second.
pub fn divide_time(time: &str, count: u64) -> Result<String> {
    if is_zero_sentinel(time) {
        return Ok(ZERO_HMS.to_string());
    }

    let secs = parse_hms(time)?;
    if count == 0 {
        return Err(Error::DivisionByZero(format!(
            "cannot divide '{}' into 0 parts",
            time
        )));
    }

    let count = u128::from(count);
    let share = (u128::from(secs) * 2 + count) / (count * 2);
    // share <= secs, so it always fits back into u64
    let share = u64::try_from(share).unwrap_or(u64::MAX);

    debug!(secs, share, "divided time");
    Ok(format_hms(share))
}

pub fn time_to_seconds(time: &str) -> Result<u64> {
    if is_zero_sentinel(time) {
        return Ok(0);
    }
    parse_hms(time)
}

/// Whole minutes in `time`; leftover seconds are dropped.
pub fn time_to_minutes(time: &str) -> Result<u64> {
    if is_zero_sentinel(time) {
        return Ok(0);
    }
    Ok(parse_hms(time)? / 60)
}

/// Minutes in an `H[:M]` timestamp. Fields past the second are ignored.
pub fn timestamp_to_minutes(time: &str) -> Result<u64> {
    let text = time.trim();
    if text.is_empty() {
        return Ok(0);
    }

    let mut fields = text.split(':');
    let number = |field: &str| -> Result<u64> {
        field
            .trim()
            .parse::<u64>()
            .map_err(|_| Error::format(time, format!("field '{}' is not a whole number", field)))
    };

    let hours = match fields.next() {
        Some(field) => number(field)?,
        None => 0,
    };
    let minutes = match fields.next() {
        Some(field) => number(field)?,
        None => 0,
    };

    hours
        .checked_mul(60)
        .and_then(|h| h.checked_add(minutes))
        .ok_or_else(|| Error::format(time, "timestamp is too large"))
}
