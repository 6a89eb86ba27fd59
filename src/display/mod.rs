//! Display formatting helpers
//!
//! 面向仪表盘展示层的纯格式化函数：数字缩写、货币、绝对日期、
//! 相对时间和头像缩写。所有 locale 相关行为由 [`FormatOptions`] 驱动。

mod dates;
mod numbers;
pub mod options;
mod text;

pub use dates::{date, relative_time, relative_time_from_now};
pub use numbers::{compact_number, currency};
pub use options::{FormatOptions, Locale, currency_symbol};
pub use text::initials;
