//! Display formatting derived from the preference context.
//!
//! Every formatter reads the context at call time; a mutated preference
//! is visible on the next call with no transition period. The plain
//! functions are infallible and render [`INVALID_DATE`] for unparseable
//! text inputs; the `try_` variants return the error instead.

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, Timelike};

use crate::context::PrefContext;
use crate::error::ParseError;
use crate::instant::Instant;
use crate::locale::Locale;
use crate::prefs::TimeFormat;

/// Rendered in place of output when an instant cannot be resolved.
pub const INVALID_DATE: &str = "Invalid Date";

/// Format hour:minute per the context's clock convention
/// (e.g. "2:00 PM" or "14:00").
pub fn format_time(ctx: &PrefContext, instant: Instant) -> String {
    try_format_time(ctx, instant).unwrap_or_else(|_| INVALID_DATE.to_string())
}

pub fn try_format_time(ctx: &PrefContext, instant: Instant) -> Result<String, ParseError> {
    let dt = instant.resolve()?;
    let display = Locale::en_us();

    Ok(match ctx.time_format() {
        TimeFormat::H12 => {
            let marker = if dt.hour() >= 12 {
                display.pm_string
            } else {
                display.am_string
            };
            format!("{}:{:02} {}", to_12_hour(dt.hour()), dt.minute(), marker)
        }
        TimeFormat::H24 => format!("{:02}:{:02}", dt.hour(), dt.minute()),
    })
}

/// Full date for display (e.g. "Monday, January 20, 2025").
pub fn format_date(instant: Instant) -> String {
    try_format_date(instant).unwrap_or_else(|_| INVALID_DATE.to_string())
}

pub fn try_format_date(instant: Instant) -> Result<String, ParseError> {
    let dt = instant.resolve()?;
    let display = Locale::en_us();
    let weekday = display.day_names_full[dt.weekday().num_days_from_sunday() as usize];
    let month = display.month_names_full[dt.month0() as usize];
    Ok(format!("{}, {} {}, {}", weekday, month, dt.day(), dt.year()))
}

/// Abbreviated date (e.g. "Jan 20").
pub fn format_date_short(instant: Instant) -> String {
    try_format_date_short(instant).unwrap_or_else(|_| INVALID_DATE.to_string())
}

pub fn try_format_date_short(instant: Instant) -> Result<String, ParseError> {
    let dt = instant.resolve()?;
    let display = Locale::en_us();
    let month = display.month_names_short[dt.month0() as usize];
    Ok(format!("{} {}", month, dt.day()))
}

/// Time range (e.g. "2:00 PM - 3:00 PM").
pub fn format_time_range(ctx: &PrefContext, start: Instant, end: Instant) -> String {
    format!("{} - {}", format_time(ctx, start), format_time(ctx, end))
}

pub fn try_format_time_range(
    ctx: &PrefContext,
    start: Instant,
    end: Instant,
) -> Result<String, ParseError> {
    Ok(format!(
        "{} - {}",
        try_format_time(ctx, start)?,
        try_format_time(ctx, end)?
    ))
}

/// Date range (e.g. "Jan 20 - Jan 22").
pub fn format_date_range(start: Instant, end: Instant) -> String {
    format!("{} - {}", format_date_short(start), format_date_short(end))
}

pub fn try_format_date_range(start: Instant, end: Instant) -> Result<String, ParseError> {
    Ok(format!(
        "{} - {}",
        try_format_date_short(start)?,
        try_format_date_short(end)?
    ))
}

/// Date and time together (e.g. "Jan 20, 2:00 PM").
pub fn format_date_time(ctx: &PrefContext, instant: Instant) -> String {
    try_format_date_time(ctx, instant).unwrap_or_else(|_| INVALID_DATE.to_string())
}

pub fn try_format_date_time(ctx: &PrefContext, instant: Instant) -> Result<String, ParseError> {
    Ok(format!(
        "{}, {}",
        try_format_date_short(instant)?,
        try_format_time(ctx, instant)?
    ))
}

/// Relative offset from the current instant (e.g. "2 hours ago",
/// "in 3 days").
pub fn format_relative(instant: Instant) -> String {
    format_relative_at(instant, Local::now().naive_local())
}

pub fn try_format_relative(instant: Instant) -> Result<String, ParseError> {
    try_format_relative_at(instant, Local::now().naive_local())
}

/// Relative offset from an explicit reference instant.
pub fn format_relative_at(instant: Instant, now: NaiveDateTime) -> String {
    try_format_relative_at(instant, now).unwrap_or_else(|_| INVALID_DATE.to_string())
}

pub fn try_format_relative_at(
    instant: Instant,
    now: NaiveDateTime,
) -> Result<String, ParseError> {
    let dt = instant.resolve()?;
    let diff_ms = (dt - now).num_milliseconds();

    // Each tier re-rounds from the millisecond difference, never from the
    // previous tier's rounded value.
    let minutes = round_half_up(diff_ms as f64 / 60_000.0);
    if minutes.abs() < 1 {
        return Ok("just now".to_string());
    }
    if minutes.abs() < 60 {
        return Ok(if minutes > 0 {
            format!("in {minutes} min")
        } else {
            format!("{} min ago", minutes.abs())
        });
    }

    let hours = round_half_up(diff_ms as f64 / 3_600_000.0);
    if hours.abs() < 24 {
        return Ok(if hours > 0 {
            format!("in {hours} hours")
        } else {
            format!("{} hours ago", hours.abs())
        });
    }

    let days = round_half_up(diff_ms as f64 / 86_400_000.0);
    Ok(if days > 0 {
        format!("in {days} days")
    } else {
        format!("{} days ago", days.abs())
    })
}

/// True iff the instant's calendar date equals the current local date.
/// Unparseable text has no calendar date and returns false.
pub fn is_today(instant: Instant) -> bool {
    is_today_at(instant, Local::now().date_naive())
}

/// Today-check against an explicit reference date.
pub fn is_today_at(instant: Instant, today: NaiveDate) -> bool {
    instant
        .resolve()
        .map(|dt| dt.date() == today)
        .unwrap_or(false)
}

/// `YYYY-MM-DD` from the date's own calendar fields.
pub fn to_iso_date_string(date: NaiveDate) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

/// Convert 24-hour time to 12-hour format.
/// 0 -> 12, 1-12 -> 1-12, 13-23 -> 1-11
pub(crate) fn to_12_hour(hour: u32) -> u32 {
    match hour {
        0 => 12,
        1..=12 => hour,
        _ => hour - 12,
    }
}

/// Round half toward positive infinity (JS `Math.round` semantics, which
/// the relative-time boundaries depend on: -1.5 rounds to -1, not -2).
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
