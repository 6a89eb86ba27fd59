//! Number display helpers
//!
//! 仪表盘上的数字缩写与货币格式化。

use super::options::{CurrencyPosition, FormatOptions, currency_symbol};

/// Abbreviate a count for dashboard display
///
/// Thresholds:
/// 1. below 1 000, negatives included, the plain integer string
/// 2. 1 000 up to a million, divided by 1 000 with one decimal and a `K`
/// 3. a million and above, divided by 1 000 000 with one decimal and an `M`
///
/// The decimal is always printed, so exactly 1 000 renders as `1.0K`.
/// Ties round away from zero (1 050 is `1.1K`).
pub fn compact_number(n: i64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", round_one_decimal(n as f64 / 1_000_000.0))
    } else if n >= 1_000 {
        format!("{:.1}K", round_one_decimal(n as f64 / 1_000.0))
    } else {
        n.to_string()
    }
}

/// `f64::round` rounds half away from zero, which is what the dashboard
/// always showed for counts. `format!("{:.1}")` alone would round half
/// to even instead.
fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Format a monetary amount
///
/// Steps:
/// 1. render the absolute amount with `max_fraction_digits` decimals
/// 2. group the integer digits with the locale separator
/// 3. trim trailing fraction zeros down to `min_fraction_digits`
/// 4. attach the currency symbol on the locale's side, sign first
///
/// With the default options this is the classic `$1,000` rendering, and
/// zero stays a bare `$0`. Unknown ISO codes fall back to `CODE 1,000`.
pub fn currency(amount: f64, opts: &FormatOptions) -> String {
    let negative = amount < 0.0;

    // 非有限值不做分组，保留浮点格式化自己的写法
    if !amount.is_finite() {
        return attach_symbol(&format!("{}", amount.abs()), negative, opts);
    }

    let max_digits = opts.max_fraction_digits.max(opts.min_fraction_digits);
    let fixed = format!("{:.*}", max_digits as usize, amount.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (fixed.as_str(), ""),
    };

    let grouped = group_digits(int_part, opts.locale.group_separator());
    let fraction = trim_fraction(frac_part, opts.min_fraction_digits);

    let number = if fraction.is_empty() {
        grouped
    } else {
        format!("{}{}{}", grouped, opts.locale.decimal_separator(), fraction)
    };

    attach_symbol(&number, negative, opts)
}

/// Insert the group separator every three digits, counting from the right
fn group_digits(digits: &str, separator: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let total = digits.len();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (total - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(c);
    }
    out
}

/// Strip trailing zeros, but never below the minimum digit count
fn trim_fraction(fraction: &str, min_digits: u8) -> &str {
    let mut end = fraction.len();
    while end > min_digits as usize && fraction.as_bytes()[end - 1] == b'0' {
        end -= 1;
    }
    &fraction[..end]
}

fn attach_symbol(number: &str, negative: bool, opts: &FormatOptions) -> String {
    let sign = if negative { "-" } else { "" };
    match currency_symbol(&opts.currency) {
        Some(symbol) => match opts.locale.currency_position() {
            CurrencyPosition::Prefix => format!("{}{}{}", sign, symbol, number),
            CurrencyPosition::Suffix => format!("{}{}\u{a0}{}", sign, number, symbol),
        },
        None => format!("{}{} {}", sign, opts.currency.to_uppercase(), number),
    }
}
