//! The preference context: merged heuristic and persisted state.
//!
//! An explicitly constructed object rather than a process global. The
//! store is injected at construction and the active locale captured
//! once; hosts that share a context across threads serialize access
//! themselves (mutators take `&mut self`).

use chrono::{Datelike, Duration, NaiveDate};

use crate::detect::{detect, system_locale};
use crate::locale::Locale;
use crate::prefs::{PrefRecord, TimeFormat, WeekStart};
use crate::store::PrefStore;

/// Weekday display style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeekdayStyle {
    /// Abbreviated names ("Sun")
    #[default]
    Short,
    /// Single letters ("S")
    Narrow,
    /// Full names ("Sunday")
    Long,
}

/// Holds the effective preferences and writes changes through to the
/// injected store.
///
/// Before [`init`](PrefContext::init) the getters return placeholder
/// defaults; after it the state is the stored record when one existed,
/// otherwise the locale heuristics. Initialization happens once; later
/// `init` calls are no-ops.
pub struct PrefContext {
    week_start_day: WeekStart,
    time_format: TimeFormat,
    initialized: bool,
    locale: Option<String>,
    store: Box<dyn PrefStore>,
}

impl PrefContext {
    /// Create a context using the host's active locale.
    pub fn new(store: Box<dyn PrefStore>) -> Self {
        Self::with_locale(store, system_locale())
    }

    /// Create a context with an explicit locale (`None` = no locale
    /// facility available).
    pub fn with_locale(store: Box<dyn PrefStore>, locale: Option<String>) -> Self {
        let placeholder = PrefRecord::default();
        PrefContext {
            week_start_day: placeholder.week_start_day,
            time_format: placeholder.time_format,
            initialized: false,
            locale,
            store,
        }
    }

    /// Adopt the stored record if one exists, otherwise detect defaults
    /// from the locale. Idempotent: repeated calls are no-ops.
    pub fn init(&mut self) {
        if self.initialized {
            return;
        }
        let record = self
            .store
            .load()
            .unwrap_or_else(|| detect(self.locale.as_deref()));
        self.adopt(record);
        self.initialized = true;
    }

    pub fn week_start_day(&self) -> WeekStart {
        self.week_start_day
    }

    pub fn time_format(&self) -> TimeFormat {
        self.time_format
    }

    pub fn initialized(&self) -> bool {
        self.initialized
    }

    /// Update the week start and persist the full record immediately.
    pub fn set_week_start_day(&mut self, day: WeekStart) {
        self.week_start_day = day;
        self.store.save(&self.record());
    }

    /// Update the clock convention and persist the full record
    /// immediately.
    pub fn set_time_format(&mut self, format: TimeFormat) {
        self.time_format = format;
        self.store.save(&self.record());
    }

    /// Recompute heuristic defaults (ignoring any persisted value), adopt
    /// them, and drop the persisted record. Leaves `initialized` as-is.
    pub fn reset(&mut self) {
        let detected = detect(self.locale.as_deref());
        self.adopt(detected);
        self.store.clear();
    }

    /// Seven weekday names ordered from the configured start day.
    ///
    /// Walks seven offsets `(start + i) % 7` from a fixed known Sunday;
    /// names come from the fixed display locale regardless of the
    /// detection locale.
    pub fn week_days(&self, style: WeekdayStyle) -> [&'static str; 7] {
        let display = Locale::en_us();
        let names = match style {
            WeekdayStyle::Short => display.day_names_short,
            WeekdayStyle::Narrow => display.day_names_narrow,
            WeekdayStyle::Long => display.day_names_full,
        };

        let start = match self.week_start_day {
            WeekStart::Sunday => 0usize,
            WeekStart::Monday => 1,
        };

        let mut days = [""; 7];
        for (i, slot) in days.iter_mut().enumerate() {
            let date = base_sunday() + Duration::days(((start + i) % 7) as i64);
            *slot = names[date.weekday().num_days_from_sunday() as usize];
        }
        days
    }

    /// Zero-based index of a date within the configured week, where
    /// index 0 is always the configured first day.
    pub fn day_index(&self, date: NaiveDate) -> u32 {
        let native = date.weekday().num_days_from_sunday();
        match self.week_start_day {
            WeekStart::Sunday => native,
            WeekStart::Monday => {
                if native == 0 {
                    6
                } else {
                    native - 1
                }
            }
        }
    }

    fn adopt(&mut self, record: PrefRecord) {
        self.week_start_day = record.week_start_day;
        self.time_format = record.time_format;
    }

    fn record(&self) -> PrefRecord {
        PrefRecord {
            week_start_day: self.week_start_day,
            time_format: self.time_format,
        }
    }
}

/// 2024-01-07, the base Sunday for weekday-name ordering.
fn base_sunday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 7).unwrap()
}
