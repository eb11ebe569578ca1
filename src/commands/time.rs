use crate::OutputFormat;
use crate::time::{self, Lenient, calendar};
use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::{Value, json};

/// How a command renders results and treats bad input.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mode {
    pub format: OutputFormat,
    pub lenient: bool,
}

#[derive(Debug, Serialize)]
pub struct Report {
    pub operation: &'static str,
    pub input: Value,
    pub result: Value,
}

impl Report {
    fn emit(&self, format: OutputFormat, text: &str) -> Result<()> {
        match format {
            OutputFormat::Json => {
                let out =
                    serde_json::to_string_pretty(self).context("Failed to serialize result")?;
                println!("{}", out);
            }
            OutputFormat::Text => println!("{}", text),
        }
        Ok(())
    }
}

pub fn sum(durations: &[String], mode: Mode) -> Result<()> {
    let total = if mode.lenient {
        Lenient::new().sum_durations(durations)
    } else {
        time::sum_durations(durations).context("Failed to sum durations")?
    };

    Report {
        operation: "sum",
        input: json!(durations),
        result: json!(total),
    }
    .emit(mode.format, &total)
}

pub fn percent(total: &str, used: &str, mode: Mode) -> Result<()> {
    let percent = if mode.lenient {
        Lenient::new().time_percentage(total, used)
    } else {
        time::time_percentage(total, used)
            .with_context(|| format!("Failed to compute share of {} used by {}", total, used))?
    };

    Report {
        operation: "percent",
        input: json!({ "total": total, "used": used }),
        result: json!(percent),
    }
    .emit(mode.format, &format!("{}%", percent))
}

pub fn divide(time_str: &str, count: u64, mode: Mode) -> Result<()> {
    let share = if mode.lenient {
        Lenient::new().divide_time(time_str, count)
    } else {
        time::divide_time(time_str, count)
            .with_context(|| format!("Failed to divide {} by {}", time_str, count))?
    };

    Report {
        operation: "divide",
        input: json!({ "time": time_str, "count": count }),
        result: json!(share),
    }
    .emit(mode.format, &share)
}

pub fn seconds(time_str: &str, mode: Mode) -> Result<()> {
    let secs = if mode.lenient {
        Lenient::new().time_to_seconds(time_str)
    } else {
        time::time_to_seconds(time_str).context("Failed to convert time to seconds")?
    };

    Report {
        operation: "seconds",
        input: json!(time_str),
        result: json!(secs),
    }
    .emit(mode.format, &secs.to_string())
}

pub fn minutes(time_str: &str, mode: Mode) -> Result<()> {
    let mins = if mode.lenient {
        Lenient::new().time_to_minutes(time_str)
    } else {
        time::time_to_minutes(time_str).context("Failed to convert time to minutes")?
    };

    Report {
        operation: "minutes",
        input: json!(time_str),
        result: json!(mins),
    }
    .emit(mode.format, &mins.to_string())
}

pub fn hours_between(start: &str, end: &str, mode: Mode) -> Result<()> {
    let hours = calendar::hours_between(start, end)
        .context("Failed to compute hours between dates")?;

    Report {
        operation: "hours-between",
        input: json!({ "start": start, "end": end }),
        result: json!(hours),
    }
    .emit(mode.format, &format!("{:.2}", hours))
}

pub fn days_between(a: &str, b: &str, mode: Mode) -> Result<()> {
    let days = calendar::days_between(a, b).context("Failed to compute days between dates")?;

    Report {
        operation: "days-between",
        input: json!({ "from": a, "to": b }),
        result: json!(days),
    }
    .emit(mode.format, &days.to_string())
}
