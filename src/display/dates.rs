//! Date display helpers
//!
//! 绝对日期与相对时间的展示格式。

use chrono::{DateTime, Datelike, Utc};

use super::options::{FormatOptions, Locale};

/// Absolute date in the locale's short form
///
/// `en-US` reads `Jan 5, 2026`, the other locales use their own
/// day-first orderings.
pub fn date(ts: DateTime<Utc>, opts: &FormatOptions) -> String {
    let month = opts.locale.short_month(ts.month0() as usize);
    let day = ts.day();
    let year = ts.year();
    match opts.locale {
        Locale::EnUs => format!("{} {}, {}", month, day, year),
        Locale::EnGb => format!("{} {} {}", day, month, year),
        Locale::DeDe => format!("{}. {} {}", day, month, year),
        Locale::FrFr => format!("{} {} {}", day, month, year),
    }
}

/// Bucketed "time ago" rendering against an explicit `now`
///
/// 1. under a minute, `just now` (future timestamps land here too)
/// 2. under an hour, whole minutes as `{m}m ago`
/// 3. under a day, whole hours as `{h}h ago`
/// 4. under a week, whole days as `{d}d ago`
/// 5. a week or older falls back to the absolute [`date`]
pub fn relative_time(ts: DateTime<Utc>, now: DateTime<Utc>, opts: &FormatOptions) -> String {
    let elapsed = now.signed_duration_since(ts);
    let seconds = elapsed.num_seconds();

    if seconds < 60 {
        "just now".to_string()
    } else if seconds < 3_600 {
        format!("{}m ago", elapsed.num_minutes())
    } else if seconds < 86_400 {
        format!("{}h ago", elapsed.num_hours())
    } else if elapsed.num_days() < 7 {
        format!("{}d ago", elapsed.num_days())
    } else {
        date(ts, opts)
    }
}

/// Wall-clock convenience wrapper around [`relative_time`]
///
/// The output depends on the moment of the call, so two invocations for
/// the same timestamp need not agree.
pub fn relative_time_from_now(ts: DateTime<Utc>, opts: &FormatOptions) -> String {
    relative_time(ts, Utc::now(), opts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn sample_date() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 5, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_date_en_us() {
        assert_eq!(date(sample_date(), &FormatOptions::default()), "Jan 5, 2026");
    }

    #[test]
    fn test_date_other_locales() {
        let ts = sample_date();
        let gb = FormatOptions {
            locale: Locale::EnGb,
            ..FormatOptions::default()
        };
        assert_eq!(date(ts, &gb), "5 Jan 2026");

        let de = FormatOptions {
            locale: Locale::DeDe,
            ..FormatOptions::default()
        };
        assert_eq!(date(ts, &de), "5. Jan. 2026");

        let fr = FormatOptions {
            locale: Locale::FrFr,
            ..FormatOptions::default()
        };
        assert_eq!(date(ts, &fr), "5 janv. 2026");
    }

    #[test]
    fn test_date_december() {
        let ts = Utc.with_ymd_and_hms(2025, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(date(ts, &FormatOptions::default()), "Dec 31, 2025");
    }

    #[test]
    fn test_relative_just_now() {
        let now = sample_date();
        let opts = FormatOptions::default();
        assert_eq!(relative_time(now - Duration::seconds(30), now, &opts), "just now");
        assert_eq!(relative_time(now, now, &opts), "just now");
        assert_eq!(relative_time(now - Duration::seconds(59), now, &opts), "just now");
    }

    #[test]
    fn test_relative_minutes() {
        let now = sample_date();
        let opts = FormatOptions::default();
        assert_eq!(relative_time(now - Duration::seconds(60), now, &opts), "1m ago");
        assert_eq!(relative_time(now - Duration::seconds(90), now, &opts), "1m ago");
        assert_eq!(relative_time(now - Duration::seconds(3_599), now, &opts), "59m ago");
    }

    #[test]
    fn test_relative_hours() {
        let now = sample_date();
        let opts = FormatOptions::default();
        assert_eq!(relative_time(now - Duration::hours(1), now, &opts), "1h ago");
        assert_eq!(relative_time(now - Duration::hours(2), now, &opts), "2h ago");
        assert_eq!(
            relative_time(now - Duration::hours(23) - Duration::minutes(59), now, &opts),
            "23h ago"
        );
    }

    #[test]
    fn test_relative_days() {
        let now = sample_date();
        let opts = FormatOptions::default();
        assert_eq!(relative_time(now - Duration::days(1), now, &opts), "1d ago");
        assert_eq!(relative_time(now - Duration::days(6), now, &opts), "6d ago");
    }

    #[test]
    fn test_relative_falls_back_to_absolute() {
        let now = sample_date();
        let opts = FormatOptions::default();
        assert_eq!(relative_time(now - Duration::days(7), now, &opts), "Dec 29, 2025");
        assert_eq!(relative_time(now - Duration::days(10), now, &opts), "Dec 26, 2025");
    }

    #[test]
    fn test_relative_future_is_just_now() {
        let now = sample_date();
        let opts = FormatOptions::default();
        assert_eq!(relative_time(now + Duration::minutes(5), now, &opts), "just now");
        assert_eq!(relative_time(now + Duration::days(30), now, &opts), "just now");
    }
}
