//! Locale heuristics for default preferences.
//!
//! Infers a week-start day and clock convention from a locale tag, absent
//! any stored choice. This is a heuristic, not a locale database:
//! ambiguous or partial tags fall to Monday-start and the 24-hour clock.

use crate::formatter::to_12_hour;
use crate::locale::Locale;
use crate::prefs::{PrefRecord, TimeFormat, WeekStart};

/// Locales that historically start the week on Sunday.
const SUNDAY_START_LOCALES: [&str; 6] = ["en-US", "en-CA", "ja-JP", "ko-KR", "zh-TW", "he-IL"];

/// Hour of the reference instant (2000-01-01 13:00) probed for the
/// clock convention.
const REFERENCE_HOUR: u32 = 13;

/// Infer default preferences for a locale tag.
///
/// `None` means no host locale facility is available; the fixed default
/// `{Sunday, 12h}` is returned. Pure function of its input.
pub fn detect(locale: Option<&str>) -> PrefRecord {
    let Some(locale) = locale else {
        return PrefRecord::default();
    };

    // Probe the clock convention: render the reference hour and look for
    // an AM/PM marker in the result.
    let rendered = render_reference_hour(locale);
    let is_24h = !rendered.contains("PM") && !rendered.contains("AM");

    // A locale is Sunday-start when its text starts with an entry's
    // language subtag and contains that entry's region subtag. The exact
    // en-US check is redundant with the first clause but kept as-is.
    let sunday_start = SUNDAY_START_LOCALES.iter().any(|tag| match tag.split_once('-') {
        Some((lang, region)) => locale.starts_with(lang) && locale.contains(region),
        None => false,
    }) || locale == "en-US"
        || locale.starts_with("en-US");

    PrefRecord {
        week_start_day: if sunday_start {
            WeekStart::Sunday
        } else {
            WeekStart::Monday
        },
        time_format: if is_24h { TimeFormat::H24 } else { TimeFormat::H12 },
    }
}

/// Render the reference instant's hour the way the given locale's clock
/// convention displays it.
///
/// Stands in for a host Intl facility: locales whose numeric-hour
/// rendering carries an uppercase English AM/PM marker get one; every
/// other locale renders a bare 24-hour value (lowercase or localized
/// day-period markers never matched the probe either).
fn render_reference_hour(locale: &str) -> String {
    if renders_english_ampm(locale) {
        let display = Locale::en_us();
        let marker = if REFERENCE_HOUR >= 12 {
            display.pm_string
        } else {
            display.am_string
        };
        format!("{} {}", to_12_hour(REFERENCE_HOUR), marker)
    } else {
        REFERENCE_HOUR.to_string()
    }
}

fn renders_english_ampm(locale: &str) -> bool {
    locale == "en" || locale == "en-US" || locale.starts_with("en-US-")
}

/// The host's active locale, read from the usual POSIX environment
/// variables and normalized to a BCP 47-style tag (`en_US.UTF-8` →
/// `en-US`). `None` when nothing usable is set.
pub fn system_locale() -> Option<String> {
    for key in ["LC_ALL", "LC_TIME", "LANG"] {
        if let Ok(raw) = std::env::var(key) {
            if let Some(tag) = normalize_posix_locale(&raw) {
                return Some(tag);
            }
        }
    }
    None
}

/// Strip codeset/modifier suffixes and swap the POSIX separator.
fn normalize_posix_locale(raw: &str) -> Option<String> {
    let base = raw.split(['.', '@']).next().unwrap_or("").trim();
    if base.is_empty() || base == "C" || base == "POSIX" {
        return None;
    }
    Some(base.replace('_', "-"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_without_locale_facility() {
        assert_eq!(detect(None), PrefRecord::default());
    }

    #[test]
    fn test_en_us_is_sunday_and_12h() {
        let record = detect(Some("en-US"));
        assert_eq!(record.week_start_day, WeekStart::Sunday);
        assert_eq!(record.time_format, TimeFormat::H12);
    }

    #[test]
    fn test_ja_jp_is_sunday_and_24h() {
        let record = detect(Some("ja-JP"));
        assert_eq!(record.week_start_day, WeekStart::Sunday);
        assert_eq!(record.time_format, TimeFormat::H24);
    }

    #[test]
    fn test_en_gb_is_monday_start() {
        // Starts with "en" but carries none of the Sunday-start regions.
        let record = detect(Some("en-GB"));
        assert_eq!(record.week_start_day, WeekStart::Monday);
        assert_eq!(record.time_format, TimeFormat::H24);
    }

    #[test]
    fn test_matching_is_substring_based() {
        // The language/region test uses starts_with/contains, so a long
        // tag carrying "ja" and "JP" anywhere still matches.
        let record = detect(Some("ja-Kana-JP"));
        assert_eq!(record.week_start_day, WeekStart::Sunday);
    }

    #[test]
    fn test_en_us_variant_tags() {
        assert_eq!(detect(Some("en-US-posix")).time_format, TimeFormat::H12);
        assert_eq!(detect(Some("en")).time_format, TimeFormat::H12);
    }

    #[test]
    fn test_normalize_posix_locale() {
        assert_eq!(normalize_posix_locale("en_US.UTF-8").as_deref(), Some("en-US"));
        assert_eq!(normalize_posix_locale("de_DE@euro").as_deref(), Some("de-DE"));
        assert_eq!(normalize_posix_locale("fr-FR").as_deref(), Some("fr-FR"));
        assert_eq!(normalize_posix_locale("C"), None);
        assert_eq!(normalize_posix_locale("POSIX"), None);
        assert_eq!(normalize_posix_locale(""), None);
    }
}
