//! Display formatting options
//!
//! 所有与 locale / 货币相关的格式化选项都集中在这里，
//! 由配置显式提供，不再硬编码。

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter};
use ts_rs::TS;

use crate::api::types::TS_EXPORT_PATH;
use crate::config::DisplayConfig;

/// Supported display locales
///
/// A closed set: each variant carries its own digit grouping, decimal
/// separator, short month names and date pattern. `en-US` is the default
/// and reproduces the formatting the dashboard shipped with before the
/// locale became configurable.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, TS, EnumIter, AsRefStr,
)]
#[ts(export, export_to = TS_EXPORT_PATH)]
pub enum Locale {
    #[default]
    #[serde(rename = "en-US")]
    #[strum(serialize = "en-US")]
    EnUs,
    #[serde(rename = "en-GB")]
    #[strum(serialize = "en-GB")]
    EnGb,
    #[serde(rename = "de-DE")]
    #[strum(serialize = "de-DE")]
    DeDe,
    #[serde(rename = "fr-FR")]
    #[strum(serialize = "fr-FR")]
    FrFr,
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EnUs => write!(f, "en-US"),
            Self::EnGb => write!(f, "en-GB"),
            Self::DeDe => write!(f, "de-DE"),
            Self::FrFr => write!(f, "fr-FR"),
        }
    }
}

impl std::str::FromStr for Locale {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.replace('_', "-").to_lowercase().as_str() {
            "en-us" | "en" => Ok(Self::EnUs),
            "en-gb" => Ok(Self::EnGb),
            "de-de" | "de" => Ok(Self::DeDe),
            "fr-fr" | "fr" => Ok(Self::FrFr),
            _ => Err(format!(
                "Unsupported locale: '{}'. Valid: en-US, en-GB, de-DE, fr-FR",
                s
            )),
        }
    }
}

/// Where the currency symbol sits relative to the number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrencyPosition {
    Prefix,
    Suffix,
}

const MONTHS_EN: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const MONTHS_DE: [&str; 12] = [
    "Jan.", "Feb.", "März", "Apr.", "Mai", "Juni", "Juli", "Aug.", "Sept.", "Okt.", "Nov.", "Dez.",
];

const MONTHS_FR: [&str; 12] = [
    "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.", "nov.",
    "déc.",
];

impl Locale {
    /// 千位分组分隔符
    pub fn group_separator(&self) -> &'static str {
        match self {
            Self::EnUs | Self::EnGb => ",",
            Self::DeDe => ".",
            // CLDR 的法语分组使用窄不换行空格
            Self::FrFr => "\u{202f}",
        }
    }

    /// 小数分隔符
    pub fn decimal_separator(&self) -> &'static str {
        match self {
            Self::EnUs | Self::EnGb => ".",
            Self::DeDe | Self::FrFr => ",",
        }
    }

    /// Abbreviated month name, `month0` in `0..12`
    pub fn short_month(&self, month0: usize) -> &'static str {
        match self {
            Self::EnUs | Self::EnGb => MONTHS_EN[month0],
            Self::DeDe => MONTHS_DE[month0],
            Self::FrFr => MONTHS_FR[month0],
        }
    }

    /// Currency symbol placement for this locale
    pub fn currency_position(&self) -> CurrencyPosition {
        match self {
            Self::EnUs | Self::EnGb => CurrencyPosition::Prefix,
            Self::DeDe | Self::FrFr => CurrencyPosition::Suffix,
        }
    }
}

/// Symbol for a known ISO 4217 code
///
/// Unknown codes fall back to the code itself as a prefix, the way the
/// browser formatter renders them.
pub fn currency_symbol(code: &str) -> Option<&'static str> {
    match code.to_uppercase().as_str() {
        "USD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        "JPY" => Some("¥"),
        _ => None,
    }
}

/// Options threaded through every display helper
///
/// The defaults reproduce the original fixed behavior: US English, US
/// dollars, whole amounts.
#[derive(Debug, Clone, PartialEq)]
pub struct FormatOptions {
    pub locale: Locale,
    /// ISO 4217 currency code
    pub currency: String,
    pub min_fraction_digits: u8,
    pub max_fraction_digits: u8,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            locale: Locale::EnUs,
            currency: "USD".to_string(),
            min_fraction_digits: 0,
            max_fraction_digits: 0,
        }
    }
}

impl FormatOptions {
    /// Build from the `[display]` config section
    ///
    /// `max_fraction_digits` is clamped up to `min_fraction_digits` so an
    /// inconsistent pair never drops requested digits.
    pub fn from_config(config: &DisplayConfig) -> Self {
        Self {
            locale: config.locale,
            currency: config.currency.to_uppercase(),
            min_fraction_digits: config.min_fraction_digits,
            max_fraction_digits: config.max_fraction_digits.max(config.min_fraction_digits),
        }
    }
}
