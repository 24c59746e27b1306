//! Instant inputs accepted by the formatters.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::ParseError;

/// A point in time that can be formatted: structured chrono values or
/// text yet to be parsed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Instant<'a> {
    /// A full date and time
    DateTime(NaiveDateTime),
    /// A calendar date (treated as midnight)
    Date(NaiveDate),
    /// A textual representation, parsed on resolution
    Text(&'a str),
}

impl<'a> From<NaiveDateTime> for Instant<'a> {
    fn from(dt: NaiveDateTime) -> Self {
        Instant::DateTime(dt)
    }
}

impl<'a> From<NaiveDate> for Instant<'a> {
    fn from(d: NaiveDate) -> Self {
        Instant::Date(d)
    }
}

impl<'a> From<&'a str> for Instant<'a> {
    fn from(s: &'a str) -> Self {
        Instant::Text(s)
    }
}

impl<'a> Instant<'a> {
    /// Resolve to a concrete date-time.
    ///
    /// Text is parsed as RFC 3339 or common ISO-8601 shapes. An offset in
    /// the text keeps the text's own local fields; nothing is
    /// re-normalized across time zones.
    pub fn resolve(&self) -> Result<NaiveDateTime, ParseError> {
        match self {
            Instant::DateTime(dt) => Ok(*dt),
            Instant::Date(d) => Ok(d.and_time(NaiveTime::MIN)),
            Instant::Text(s) => parse_text(s),
        }
    }
}

fn parse_text(s: &str) -> Result<NaiveDateTime, ParseError> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.naive_local());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(dt);
        }
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(d.and_time(NaiveTime::MIN));
    }

    Err(ParseError::InvalidDate {
        input: s.to_string(),
    })
}
