//! Logging system initialization
//!
//! tracing + tracing-appender，按 `[logging]` 配置构建：
//! 控制台或文件输出、可选按天轮转、text / json 两种格式。

use tracing_appender::rolling;
use tracing_subscriber::EnvFilter;

use crate::config::{AppConfig, LoggingConfig};

/// Initialize logging from configuration
///
/// Call exactly once after the configuration is loaded. The returned
/// guard must stay alive for the whole process, dropping it stops the
/// non-blocking writer from flushing.
///
/// # Panics
/// If the log file or appender cannot be created, or a subscriber is
/// already installed.
pub fn init_logging(config: &AppConfig) -> tracing_appender::non_blocking::WorkerGuard {
    let logging = &config.logging;
    let to_console = logging.file.as_deref().is_none_or(str::is_empty);

    let writer = build_writer(logging);
    let (non_blocking, guard) = tracing_appender::non_blocking(writer);
    let filter = EnvFilter::new(logging.level.clone());

    let builder = tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(filter)
        .with_level(true)
        // ANSI 色彩只用于终端，写文件时关闭
        .with_ansi(to_console);

    if logging.format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }

    guard
}

fn build_writer(logging: &LoggingConfig) -> Box<dyn std::io::Write + Send + Sync> {
    let Some(log_file) = logging.file.as_deref().filter(|f| !f.is_empty()) else {
        return Box::new(std::io::stdout());
    };

    if logging.enable_rotation {
        let path = std::path::Path::new(log_file);
        let dir = path.parent().unwrap_or(std::path::Path::new("."));
        let prefix = path
            .file_name()
            .and_then(|f| f.to_str())
            .unwrap_or("workdeck.log")
            .trim_end_matches(".log");

        let appender = rolling::Builder::new()
            .rotation(rolling::Rotation::DAILY)
            .filename_prefix(prefix)
            .filename_suffix("log")
            .max_log_files(logging.max_backups as usize)
            .build(dir)
            .expect("Failed to create rolling log appender");
        Box::new(appender)
    } else {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_file)
            .expect("Failed to open log file");
        Box::new(file)
    }
}
