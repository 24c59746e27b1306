use chrono::{Duration, NaiveDate, NaiveDateTime};

use dateprefs::{
    format_date, format_date_range, format_date_short, format_date_time, format_relative_at,
    format_time, format_time_range, is_today_at, to_iso_date_string, try_format_time,
    Instant, MemoryStore, ParseError, PrefContext, TimeFormat, INVALID_DATE,
};

fn context(format: TimeFormat) -> PrefContext {
    let mut ctx = PrefContext::with_locale(Box::new(MemoryStore::new()), None);
    ctx.init();
    ctx.set_time_format(format);
    ctx
}

fn datetime(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .unwrap()
        .and_hms_opt(h, mi, 0)
        .unwrap()
}

#[test]
fn test_format_time_12h() {
    let ctx = context(TimeFormat::H12);
    assert_eq!(format_time(&ctx, datetime(2025, 1, 20, 14, 0).into()), "2:00 PM");
    assert_eq!(format_time(&ctx, datetime(2025, 1, 20, 0, 5).into()), "12:05 AM");
    assert_eq!(format_time(&ctx, datetime(2025, 1, 20, 12, 30).into()), "12:30 PM");
    assert_eq!(format_time(&ctx, datetime(2025, 1, 20, 9, 7).into()), "9:07 AM");
}

#[test]
fn test_format_time_24h() {
    let ctx = context(TimeFormat::H24);
    assert_eq!(format_time(&ctx, datetime(2025, 1, 20, 14, 0).into()), "14:00");
    assert_eq!(format_time(&ctx, datetime(2025, 1, 20, 0, 5).into()), "00:05");
    assert_eq!(format_time(&ctx, datetime(2025, 1, 20, 9, 7).into()), "09:07");
}

#[test]
fn test_format_time_reads_preference_at_call_time() {
    let mut ctx = context(TimeFormat::H12);
    let instant: Instant = datetime(2025, 1, 20, 14, 0).into();
    assert_eq!(format_time(&ctx, instant), "2:00 PM");
    ctx.set_time_format(TimeFormat::H24);
    assert_eq!(format_time(&ctx, instant), "14:00");
}

#[test]
fn test_format_date() {
    // 2025-01-20 was a Monday.
    assert_eq!(
        format_date(datetime(2025, 1, 20, 0, 0).into()),
        "Monday, January 20, 2025"
    );
}

#[test]
fn test_format_date_short() {
    assert_eq!(format_date_short(datetime(2025, 1, 20, 0, 0).into()), "Jan 20");
    assert_eq!(format_date_short("2025-12-03".into()), "Dec 3");
}

#[test]
fn test_format_ranges() {
    let ctx = context(TimeFormat::H12);
    let start = datetime(2025, 1, 20, 14, 0);
    let end = datetime(2025, 1, 20, 15, 0);
    assert_eq!(
        format_time_range(&ctx, start.into(), end.into()),
        "2:00 PM - 3:00 PM"
    );
    assert_eq!(
        format_date_range("2025-01-20".into(), "2025-01-22".into()),
        "Jan 20 - Jan 22"
    );
}

#[test]
fn test_format_date_time() {
    let ctx = context(TimeFormat::H12);
    assert_eq!(
        format_date_time(&ctx, datetime(2025, 1, 20, 14, 0).into()),
        "Jan 20, 2:00 PM"
    );
}

#[test]
fn test_text_instants_format_like_structured_ones() {
    let ctx = context(TimeFormat::H24);
    assert_eq!(format_time(&ctx, "2025-01-20T14:30:00".into()), "14:30");
    assert_eq!(
        format_date("2025-01-20T14:30:00Z".into()),
        "Monday, January 20, 2025"
    );
}

#[test]
fn test_unparseable_text_renders_invalid_date() {
    let ctx = context(TimeFormat::H12);
    assert_eq!(format_time(&ctx, "soon".into()), INVALID_DATE);
    assert_eq!(format_date("tomorrow".into()), INVALID_DATE);
    assert_eq!(
        format_time_range(&ctx, "soon".into(), datetime(2025, 1, 20, 15, 0).into()),
        "Invalid Date - 3:00 PM"
    );

    let err = try_format_time(&ctx, "soon".into()).unwrap_err();
    assert_eq!(
        err,
        ParseError::InvalidDate {
            input: "soon".to_string()
        }
    );
}

#[test]
fn test_relative_boundaries() {
    let now = datetime(2025, 1, 20, 12, 0);
    let at = |secs: i64| -> String {
        format_relative_at(Instant::DateTime(now + Duration::seconds(secs)), now)
    };

    assert_eq!(at(-30), "just now");
    assert_eq!(at(-90), "1 min ago");
    assert_eq!(at(3700), "in 1 hours");
    assert_eq!(at(-90_000), "1 days ago");
}

#[test]
fn test_relative_tiers() {
    let now = datetime(2025, 1, 20, 12, 0);
    let at = |secs: i64| -> String {
        format_relative_at(Instant::DateTime(now + Duration::seconds(secs)), now)
    };

    assert_eq!(at(0), "just now");
    assert_eq!(at(120), "in 2 min");
    assert_eq!(at(-45 * 60), "45 min ago");
    assert_eq!(at(2 * 3600), "in 2 hours");
    assert_eq!(at(-5 * 3600), "5 hours ago");
    assert_eq!(at(3 * 86_400), "in 3 days");
    assert_eq!(at(-10 * 86_400), "10 days ago");
}

#[test]
fn test_relative_rerounds_from_milliseconds() {
    let now = datetime(2025, 1, 20, 12, 0);

    // 84576s = 1409.6 min = 23.49 h. Chaining would round minutes to 1410
    // and then hours to 24 ("in 1 days"); rounding the raw difference
    // keeps it at 23 hours.
    let instant = Instant::DateTime(now + Duration::seconds(84_576));
    assert_eq!(format_relative_at(instant, now), "in 23 hours");

    // 23.6 h rounds up to 24 at the hour tier and spills into days.
    let instant = Instant::DateTime(now + Duration::minutes(1416));
    assert_eq!(format_relative_at(instant, now), "in 1 days");
}

#[test]
fn test_relative_invalid_text() {
    let now = datetime(2025, 1, 20, 12, 0);
    assert_eq!(format_relative_at("whenever".into(), now), INVALID_DATE);
}

#[test]
fn test_is_today() {
    let today = NaiveDate::from_ymd_opt(2025, 1, 20).unwrap();
    assert!(is_today_at(datetime(2025, 1, 20, 23, 59).into(), today));
    assert!(!is_today_at(datetime(2025, 1, 21, 0, 0).into(), today));
    assert!(!is_today_at("garbage".into(), today));
}

#[test]
fn test_to_iso_date_string() {
    let date = NaiveDate::from_ymd_opt(2025, 1, 20).unwrap();
    assert_eq!(to_iso_date_string(date), "2025-01-20");
    let padded = NaiveDate::from_ymd_opt(800, 3, 9).unwrap();
    assert_eq!(to_iso_date_string(padded), "0800-03-09");
}
