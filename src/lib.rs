//! dateprefs - locale-aware date/time display preferences
//!
//! This crate determines, stores, and applies a user's week-start-day and
//! time-format (12h/24h) preferences, and exposes formatting functions
//! derived from them. Defaults are inferred from the host locale; an
//! explicit choice is persisted and wins over detection on the next run.

pub mod context;
pub mod detect;
pub mod error;
pub mod formatter;
pub mod instant;
pub mod prefs;
pub mod store;

mod locale;

pub use context::{PrefContext, WeekdayStyle};
pub use detect::{detect, system_locale};
pub use error::ParseError;
pub use formatter::{
    format_date, format_date_range, format_date_short, format_date_time, format_relative,
    format_relative_at, format_time, format_time_range, is_today, is_today_at,
    to_iso_date_string, try_format_date, try_format_date_range, try_format_date_short,
    try_format_date_time, try_format_relative, try_format_relative_at, try_format_time,
    try_format_time_range, INVALID_DATE,
};
pub use instant::Instant;
pub use prefs::{PrefRecord, TimeFormat, WeekStart};
pub use store::{FileStore, MemoryStore, PrefStore};
