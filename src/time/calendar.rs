use crate::error::{Error, Result};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use std::fmt::{Display, Write};

const DATE_TIME_FORMATS: [&str; 3] =
    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];
pub const OUTPUT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// chrono reports a bad strftime specifier as fmt::Error, which to_string() would panic on
fn render(formatted: impl Display, format: &str) -> Result<String> {
    let mut out = String::new();
    write!(out, "{}", formatted)
        .map_err(|_| Error::format(format, "unsupported date format specifier"))?;
    Ok(out)
}

fn parse_timezone(name: &str) -> Result<Tz> {
    name.trim().parse::<Tz>().map_err(|_| Error::InvalidTimezone {
        name: name.to_string(),
    })
}

/// Parse `YYYY-MM-DD[ HH:MM[:SS]]` text; a bare date means midnight.
pub fn parse_date_time(input: &str) -> Result<NaiveDateTime> {
    let text = input.trim();

    for format in DATE_TIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, format) {
            return Ok(dt);
        }
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or_else(|| Error::InvalidDate {
            input: input.to_string(),
        })
}

/// Hours from `start` to `end`; 0 when `start` is later than `end`.
pub fn hours_between(start: &str, end: &str) -> Result<f64> {
    let start = parse_date_time(start)?;
    let end = parse_date_time(end)?;

    if start > end {
        return Ok(0.0);
    }
    Ok((end - start).num_seconds() as f64 / 3600.0)
}

/// Absolute number of whole days between two dates.
pub fn days_between(a: &str, b: &str) -> Result<i64> {
    let a = parse_date_time(a)?;
    let b = parse_date_time(b)?;
    Ok((b - a).num_days().abs())
}

/// Every day from `start` through `end`, rendered with a strftime `format`.
pub fn date_range(start: &str, end: &str, format: &str) -> Result<Vec<String>> {
    let start = parse_date_time(start)?.date();
    let end = parse_date_time(end)?.date();

    start
        .iter_days()
        .take_while(|day| *day <= end)
        .map(|day| render(day.format(format), format))
        .collect()
}

/// Full years between a `DD-MM-YYYY` birth date and `today`.
pub fn age_on(date_of_birth: &str, today: NaiveDate) -> Result<u32> {
    let dob = NaiveDate::parse_from_str(date_of_birth.trim(), "%d-%m-%Y").map_err(|_| {
        Error::InvalidDate {
            input: date_of_birth.to_string(),
        }
    })?;

    // None when the birth date is in the future
    Ok(today.years_since(dob).unwrap_or(0))
}

pub fn age(date_of_birth: &str) -> Result<u32> {
    age_on(date_of_birth, Local::now().date_naive())
}

/// Whole hours between `created` and `now`, in either direction.
pub fn hours_since_at(created: &str, now: NaiveDateTime) -> Result<i64> {
    let created = parse_date_time(created)?;
    Ok((now - created).num_hours().abs())
}

pub fn hours_since(created: &str) -> Result<i64> {
    hours_since_at(created, Local::now().naive_local())
}

/// Render a Unix timestamp (UTC, seconds) with a strftime `format`.
pub fn timestamp_to_date(timestamp: i64, format: &str) -> Result<String> {
    let dt = DateTime::from_timestamp(timestamp, 0).ok_or_else(|| Error::InvalidDate {
        input: timestamp.to_string(),
    })?;
    render(dt.format(format), format)
}

/// Wall-clock `date` in zone `tz` as a UTC `YYYY-MM-DD HH:MM:SS` string.
///
/// Ambiguous times at a DST fall-back resolve to the earlier instant;
/// times skipped by a spring-forward gap are an [`Error::InvalidDate`].
pub fn local_to_utc(tz: &str, date: &str) -> Result<String> {
    let zone = parse_timezone(tz)?;
    let naive = parse_date_time(date)?;
    let local = zone
        .from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| Error::InvalidDate {
            input: date.to_string(),
        })?;
    Ok(local.with_timezone(&Utc).format(OUTPUT_FORMAT).to_string())
}

/// UTC `date` as wall-clock `YYYY-MM-DD HH:MM:SS` in zone `tz`.
pub fn utc_to_local(tz: &str, date: &str) -> Result<String> {
    let zone = parse_timezone(tz)?;
    let naive = parse_date_time(date)?;
    Ok(Utc
        .from_utc_datetime(&naive)
        .with_timezone(&zone)
        .format(OUTPUT_FORMAT)
        .to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_time_forms() {
        assert!(parse_date_time("2026-01-07 18:30:00").is_ok());
        assert!(parse_date_time("2026-01-07T18:30:00").is_ok());
        let midnight = parse_date_time("2026-01-07").unwrap();
        assert_eq!(midnight.to_string(), "2026-01-07 00:00:00");
        assert!(matches!(
            parse_date_time("07/01/2026"),
            Err(Error::InvalidDate { .. })
        ));
    }

    #[test]
    fn test_hours_between() {
        assert_eq!(
            hours_between("2026-01-07 09:00:00", "2026-01-07 17:30:00").unwrap(),
            8.5
        );
        assert_eq!(hours_between("2026-01-08", "2026-01-07").unwrap(), 0.0);
    }

    #[test]
    fn test_days_between_is_absolute() {
        assert_eq!(days_between("2026-01-01", "2026-01-31").unwrap(), 30);
        assert_eq!(days_between("2026-01-31", "2026-01-01").unwrap(), 30);
    }

    #[test]
    fn test_date_range_inclusive() {
        let days = date_range("2026-02-27", "2026-03-02", "%d/%m").unwrap();
        assert_eq!(days, vec!["27/02", "28/02", "01/03", "02/03"]);
        assert!(date_range("2026-03-02", "2026-03-01", "%F").unwrap().is_empty());
    }

    #[test]
    fn test_age_on() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        assert_eq!(age_on("19-10-1990", today).unwrap(), 36);
        assert_eq!(age_on("20-10-1990", today).unwrap(), 35);
        assert_eq!(age_on("01-01-2030", today).unwrap(), 0);
        assert!(age_on("1990-10-19", today).is_err());
    }

    #[test]
    fn test_date_range_bad_format_is_error() {
        let err = date_range("2026-01-01", "2026-01-02", "%Q").unwrap_err();
        assert!(err.is_format());
    }

    #[test]
    fn test_hours_since_at_is_absolute() {
        let now = parse_date_time("2026-10-19 12:00:00").unwrap();
        assert_eq!(hours_since_at("2026-10-18 09:30:00", now).unwrap(), 26);
        assert_eq!(hours_since_at("2026-10-19 15:59:00", now).unwrap(), 3);
        assert!(hours_since_at("yesterday", now).is_err());
        assert!(hours_since("2000-01-01").unwrap() > 0);
    }

    #[test]
    fn test_timestamp_to_date() {
        assert_eq!(timestamp_to_date(0, "%Y-%m-%d").unwrap(), "1970-01-01");
        assert_eq!(
            timestamp_to_date(1_767_225_600, OUTPUT_FORMAT).unwrap(),
            "2026-01-01 00:00:00"
        );
        assert!(matches!(
            timestamp_to_date(i64::MAX, "%F"),
            Err(Error::InvalidDate { .. })
        ));
        assert!(timestamp_to_date(0, "%Q").unwrap_err().is_format());
    }

    #[test]
    fn test_local_to_utc() {
        assert_eq!(
            local_to_utc("Europe/London", "2026-07-01 12:00:00").unwrap(),
            "2026-07-01 11:00:00"
        );
        assert_eq!(
            local_to_utc("Asia/Kolkata", "2026-01-01 05:30:00").unwrap(),
            "2026-01-01 00:00:00"
        );
        // 01:30 happens twice on 2026-11-01 in New York; the EDT reading wins
        assert_eq!(
            local_to_utc("America/New_York", "2026-11-01 01:30:00").unwrap(),
            "2026-11-01 05:30:00"
        );
    }

    #[test]
    fn test_local_to_utc_in_dst_gap() {
        // clocks jump from 02:00 to 03:00 on 2026-03-08 in New York
        let err = local_to_utc("America/New_York", "2026-03-08 02:30:00").unwrap_err();
        assert!(matches!(err, Error::InvalidDate { .. }));
    }

    #[test]
    fn test_utc_to_local() {
        assert_eq!(
            utc_to_local("Australia/Melbourne", "2026-01-01 00:00:00").unwrap(),
            "2026-01-01 11:00:00"
        );
        assert_eq!(utc_to_local("UTC", "2026-01-01").unwrap(), "2026-01-01 00:00:00");
    }

    #[test]
    fn test_unknown_timezone() {
        let err = utc_to_local("Mars/Olympus", "2026-01-01 00:00:00").unwrap_err();
        assert_eq!(
            err,
            Error::InvalidTimezone {
                name: "Mars/Olympus".to_string()
            }
        );
        assert!(local_to_utc("", "2026-01-01").is_err());
    }
}
