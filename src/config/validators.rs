//! 配置值验证模块
//!
//! 启动时对配置做一次性检查。所有问题都是建议级别（warn 日志），
//! 不会阻止启动：运行期自有回退行为。

use tracing::warn;
use tracing_subscriber::EnvFilter;

use super::{AppConfig, IdentityMode};
use crate::display::currency_symbol;

/// 验证货币代码
///
/// 未知代码不算错误（格式化时会用代码本身做前缀），
/// 但形状不对的值会被拒绝。
pub fn check_currency_code(code: &str) -> Result<(), String> {
    if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(format!(
            "Invalid currency code '{}'. Expected a 3-letter ISO 4217 code like USD",
            code
        ));
    }
    Ok(())
}

/// 验证日志级别是否为合法的 EnvFilter 指令
pub fn check_log_level(level: &str) -> Result<(), String> {
    EnvFilter::try_new(level)
        .map(|_| ())
        .map_err(|e| format!("Invalid log level '{}': {}", level, e))
}

/// 验证日志格式
pub fn check_log_format(format: &str) -> Result<(), String> {
    match format {
        "text" | "json" => Ok(()),
        other => Err(format!(
            "Invalid log format '{}'. Valid: text, json",
            other
        )),
    }
}

/// 启动时的配置体检，只提示不拦截
pub fn validate_config(config: &AppConfig) {
    if let Err(e) = check_log_level(&config.logging.level) {
        warn!("{}. Falling back to 'info'", e);
    }
    if let Err(e) = check_log_format(&config.logging.format) {
        warn!("{}. Falling back to 'text'", e);
    }

    if let Err(e) = check_currency_code(&config.display.currency) {
        warn!("{}", e);
    } else if currency_symbol(&config.display.currency).is_none() {
        warn!(
            "No symbol known for currency '{}', amounts will be prefixed with the code itself",
            config.display.currency
        );
    }

    if config.display.max_fraction_digits < config.display.min_fraction_digits {
        warn!(
            "display.max_fraction_digits ({}) is below min_fraction_digits ({}), the larger value wins",
            config.display.max_fraction_digits, config.display.min_fraction_digits
        );
    }

    match config.identity.mode {
        IdentityMode::TrustedHeader if config.identity.header.is_empty() => {
            warn!("identity.header is empty, no identity claims will ever match");
        }
        IdentityMode::Static => {
            if config.identity.static_identity.email.is_empty() {
                warn!("identity.static_identity.email is empty");
            }
            if config.identity.static_identity.name.is_empty() {
                warn!("identity.static_identity.name is empty, avatar initials will be blank");
            }
        }
        _ => {}
    }

    if config.pages.enabled && config.pages.app_name.is_empty() {
        warn!("pages.app_name is empty, the shell will render without a product name");
    }

    if config.server.cpu_count == 0 {
        warn!("server.cpu_count is 0, using 1 worker instead");
    }
}
