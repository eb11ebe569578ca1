use clocktally::error::Error;
use clocktally::time::{
    Lenient, divide_time, format_hms, sum_durations, time_percentage, time_to_minutes,
    time_to_seconds,
};
use std::cell::RefCell;
use std::thread;

#[test]
fn test_sum_durations_properties() {
    let none: Vec<String> = Vec::new();
    assert_eq!(sum_durations(none).unwrap(), "00:00");
    assert_eq!(sum_durations(["1:30", "2:45"]).unwrap(), "04:15");
    assert_eq!(sum_durations(["", "0:10"]).unwrap(), "00:10");
}

#[test]
fn test_sum_durations_malformed_is_format_error() {
    for bad in ["130", "1:30:00", "1:", ":30", "a:b", "1.5:00"] {
        let err = sum_durations([bad]).unwrap_err();
        assert!(
            matches!(err, Error::Format { .. }),
            "expected format error for {:?}, got {:?}",
            bad,
            err
        );
    }
}

#[test]
fn test_time_percentage_properties() {
    assert_eq!(time_percentage("02:00:00", "01:00:00").unwrap(), 50);
    assert_eq!(time_percentage("01:00:00", "00:00:00").unwrap(), 0);

    let err = time_percentage("00:00:00", "00:00:01").unwrap_err();
    assert!(matches!(err, Error::DivisionByZero(_)));
}

#[test]
fn test_time_percentage_zero_total_defaults_when_lenient() {
    let reported = RefCell::new(Vec::new());
    let lenient = Lenient::with_sink(|op: &'static str, e: &Error| {
        reported.borrow_mut().push(format!("{}: {}", op, e));
    });

    assert_eq!(lenient.time_percentage("00:00:00", "00:00:01"), 0);

    let reported = reported.borrow();
    assert_eq!(reported.len(), 1);
    assert!(reported[0].starts_with("time_percentage: Division by zero"));
}

#[test]
fn test_divide_time_properties() {
    assert_eq!(divide_time("01:00:00", 2).unwrap(), "00:30:00");
    assert_eq!(divide_time("00:00:00", 5).unwrap(), "00:00:00");
    assert_eq!(divide_time("10:00:00", 4).unwrap(), "02:30:00");
    assert!(matches!(
        divide_time("01:00:00", 0),
        Err(Error::DivisionByZero(_))
    ));
}

#[test]
fn test_conversion_properties() {
    assert_eq!(time_to_seconds("00:01:00").unwrap(), 60);
    assert_eq!(time_to_minutes("00:01:00").unwrap(), 1);
    assert_eq!(time_to_seconds("02:03:04").unwrap(), 7384);
    assert_eq!(time_to_minutes("02:03:04").unwrap(), 123);
}

#[test]
fn test_short_form_reads_as_minutes_seconds() {
    // "1:30" in HH:MM:SS positions is one minute thirty seconds
    assert_eq!(time_to_seconds("1:30").unwrap(), 90);
    assert_eq!(time_percentage("1:00", "0:30").unwrap(), 50);
}

#[test]
fn test_two_field_value_with_wide_first_field_is_rejected() {
    // not read as 123 hours 45 minutes
    assert!(time_to_seconds("123:45").unwrap_err().is_format());
    assert!(divide_time("123:45", 2).unwrap_err().is_format());
    assert_eq!(time_to_seconds("123:45:00").unwrap(), 123 * 3600 + 45 * 60);
}

#[test]
fn test_round_trip_through_format() {
    for secs in [0u64, 1, 59, 60, 61, 3599, 3600, 3661, 86_399, 86_400, 359_999, 360_000] {
        assert_eq!(time_to_seconds(&format_hms(secs)).unwrap(), secs);
    }
}

#[test]
fn test_operations_are_idempotent() {
    for _ in 0..3 {
        assert_eq!(sum_durations(["1:30", "2:45"]).unwrap(), "04:15");
        assert_eq!(divide_time("01:00:00", 3).unwrap(), "00:20:00");
        assert_eq!(time_percentage("03:00:00", "01:00:00").unwrap(), 33);
    }
}

#[test]
fn test_concurrent_calls_share_nothing() {
    let handles: Vec<_> = (1..=8u64)
        .map(|n| {
            thread::spawn(move || {
                let time = format_hms(n * 3600);
                (divide_time(&time, n).unwrap(), time_to_minutes(&time).unwrap())
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let (share, minutes) = handle.join().unwrap();
        assert_eq!(share, "01:00:00");
        assert_eq!(minutes, (i as u64 + 1) * 60);
    }
}
