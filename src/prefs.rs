//! Preference types persisted and applied by the context.

use serde::{Deserialize, Serialize};

/// Which weekday opens the calendar week.
///
/// Exactly two conventions exist; no other day may start a week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

/// Clock convention for rendered times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeFormat {
    /// 12-hour clock with an AM/PM marker
    #[default]
    #[serde(rename = "12h")]
    H12,
    /// 24-hour clock
    #[serde(rename = "24h")]
    H24,
}

/// The full preference record, persisted as a single JSON document.
///
/// Always written whole: both fields go out on every save, even when only
/// one changed. A record missing either field fails to parse as a unit;
/// unknown fields are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrefRecord {
    pub week_start_day: WeekStart,
    pub time_format: TimeFormat,
}

impl Default for PrefRecord {
    fn default() -> Self {
        PrefRecord {
            week_start_day: WeekStart::Sunday,
            time_format: TimeFormat::H12,
        }
    }
}
