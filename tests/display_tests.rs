//! Display formatting property tests
//!
//! 展示层格式化函数的行为契约：数字缩写阈值、货币分组、
//! 绝对日期与相对时间分桶、头像缩写。

use chrono::{Duration, TimeZone, Utc};

use workdeck::display::{
    FormatOptions, Locale, compact_number, currency, date, initials, relative_time,
    relative_time_from_now,
};

// =============================================================================
// compact_number
// =============================================================================

#[test]
fn test_compact_number_below_threshold_is_exact() {
    // 1000 以下（含全部负数）原样输出整数
    for n in [0, 1, 9, 42, 500, 999, -1, -999, -50_000] {
        assert_eq!(compact_number(n), n.to_string(), "n = {}", n);
    }
}

#[test]
fn test_compact_number_thousands_band() {
    assert_eq!(compact_number(1_000), "1.0K");
    assert_eq!(compact_number(1_200), "1.2K");
    assert_eq!(compact_number(8_451), "8.5K");
    assert_eq!(compact_number(999_999), "1000.0K");
}

#[test]
fn test_compact_number_millions_band() {
    assert_eq!(compact_number(1_000_000), "1.0M");
    assert_eq!(compact_number(1_200_000), "1.2M");
    assert_eq!(compact_number(73_500_000), "73.5M");
}

#[test]
fn test_compact_number_always_one_decimal_when_abbreviated() {
    // 缩写形式永远带一位小数
    assert_eq!(compact_number(2_000), "2.0K");
    assert_eq!(compact_number(3_000_000), "3.0M");
}

#[test]
fn test_compact_number_ties_round_away_from_zero() {
    assert_eq!(compact_number(1_050), "1.1K");
    assert_eq!(compact_number(2_150), "2.2K");
    assert_eq!(compact_number(1_250_000), "1.3M");
}

// =============================================================================
// currency
// =============================================================================

#[test]
fn test_currency_default_is_whole_dollars() {
    let opts = FormatOptions::default();
    assert_eq!(currency(1000.0, &opts), "$1,000");
    assert_eq!(currency(0.0, &opts), "$0");
    assert_eq!(currency(42.0, &opts), "$42");
    assert_eq!(currency(1_234_567.0, &opts), "$1,234,567");
}

#[test]
fn test_currency_sign_precedes_symbol() {
    let opts = FormatOptions::default();
    assert_eq!(currency(-42.0, &opts), "-$42");
    assert_eq!(currency(-1000.0, &opts), "-$1,000");
}

#[test]
fn test_currency_fraction_digit_bounds() {
    let fixed = FormatOptions {
        min_fraction_digits: 2,
        max_fraction_digits: 2,
        ..FormatOptions::default()
    };
    assert_eq!(currency(19.99, &fixed), "$19.99");
    assert_eq!(currency(5.0, &fixed), "$5.00");

    // max > min：格式化到 max 后修剪尾零，但绝不低于 min
    let elastic = FormatOptions {
        min_fraction_digits: 0,
        max_fraction_digits: 3,
        ..FormatOptions::default()
    };
    assert_eq!(currency(1.125, &elastic), "$1.125");
    assert_eq!(currency(1.100, &elastic), "$1.1");
    assert_eq!(currency(1.0, &elastic), "$1");
}

#[test]
fn test_currency_locale_separators_and_symbol_side() {
    let de = FormatOptions {
        locale: Locale::DeDe,
        currency: "EUR".to_string(),
        ..FormatOptions::default()
    };
    assert_eq!(currency(12_345.0, &de), "12.345\u{a0}€");

    let gb = FormatOptions {
        locale: Locale::EnGb,
        currency: "GBP".to_string(),
        ..FormatOptions::default()
    };
    assert_eq!(currency(12_345.0, &gb), "£12,345");
}

#[test]
fn test_currency_unknown_iso_code_uses_code_prefix() {
    let opts = FormatOptions {
        currency: "CHF".to_string(),
        ..FormatOptions::default()
    };
    assert_eq!(currency(100.0, &opts), "CHF 100");
}

// =============================================================================
// date / relative_time
// =============================================================================

#[test]
fn test_date_short_form_per_locale() {
    let ts = Utc.with_ymd_and_hms(2026, 3, 9, 8, 30, 0).unwrap();

    assert_eq!(date(ts, &FormatOptions::default()), "Mar 9, 2026");

    let fr = FormatOptions {
        locale: Locale::FrFr,
        ..FormatOptions::default()
    };
    assert_eq!(date(ts, &fr), "9 mars 2026");
}

#[test]
fn test_relative_time_buckets() {
    let now = Utc.with_ymd_and_hms(2026, 1, 5, 12, 0, 0).unwrap();
    let opts = FormatOptions::default();

    assert_eq!(relative_time(now - Duration::seconds(30), now, &opts), "just now");
    assert_eq!(relative_time(now - Duration::minutes(2), now, &opts), "2m ago");
    assert_eq!(relative_time(now - Duration::hours(2), now, &opts), "2h ago");
    assert_eq!(relative_time(now - Duration::days(3), now, &opts), "3d ago");
}

#[test]
fn test_relative_time_week_old_falls_back_to_date() {
    let now = Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap();
    let opts = FormatOptions::default();
    let ten_days_ago = now - Duration::days(10);

    assert_eq!(
        relative_time(ten_days_ago, now, &opts),
        date(ten_days_ago, &opts)
    );
}

#[test]
fn test_relative_time_bucket_edges() {
    let now = Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap();
    let opts = FormatOptions::default();

    // 每个阈值上的第一个值落入下一个桶
    assert_eq!(relative_time(now - Duration::seconds(59), now, &opts), "just now");
    assert_eq!(relative_time(now - Duration::seconds(60), now, &opts), "1m ago");
    assert_eq!(relative_time(now - Duration::minutes(59), now, &opts), "59m ago");
    assert_eq!(relative_time(now - Duration::minutes(60), now, &opts), "1h ago");
    assert_eq!(relative_time(now - Duration::hours(23), now, &opts), "23h ago");
    assert_eq!(relative_time(now - Duration::hours(24), now, &opts), "1d ago");
    assert_eq!(relative_time(now - Duration::days(6), now, &opts), "6d ago");
    assert_eq!(
        relative_time(now - Duration::days(7), now, &opts),
        date(now - Duration::days(7), &opts)
    );
}

#[test]
fn test_relative_time_from_now_recent_timestamp() {
    let opts = FormatOptions::default();
    // 刚刚发生的时间戳总是 "just now"，具体 now 值无关紧要
    assert_eq!(relative_time_from_now(Utc::now(), &opts), "just now");
}

// =============================================================================
// initials
// =============================================================================

#[test]
fn test_initials_contract() {
    assert_eq!(initials("Ada Lovelace"), "AL");
    assert_eq!(initials("Grace"), "G");
    assert_eq!(initials("mary jane watson"), "MJ");
}

#[test]
fn test_initials_whitespace_never_produces_empty_words() {
    assert_eq!(initials("Ada  Lovelace"), "AL");
    assert_eq!(initials("  Ada\t Lovelace \n"), "AL");
    assert_eq!(initials(""), "");
    assert_eq!(initials(" \t\n"), "");
}
