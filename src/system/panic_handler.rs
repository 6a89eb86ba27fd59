//! Panic handler module
//!
//! 两种运行模式的 panic 呈现不同：
//! - Server 模式：彩色详情 + 栈回溯
//! - CLI 模式：一行提示
//!
//! 两种模式都会把完整报告追加到 crash.log。

use chrono::Utc;
use std::fs::OpenOptions;
use std::io::Write;
use std::panic::{self, PanicHookInfo};

/// Running mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Server,
    Cli,
}

/// Install custom panic hook
pub fn install_panic_hook(mode: RunMode) {
    panic::set_hook(Box::new(move |info| handle_panic(mode, info)));
}

fn handle_panic(mode: RunMode, info: &PanicHookInfo<'_>) {
    let message = panic_message(info);
    let location = info
        .location()
        .map(|loc| format!("{}:{}:{}", loc.file(), loc.line(), loc.column()))
        .unwrap_or_else(|| "unknown location".to_string());
    let backtrace = std::backtrace::Backtrace::force_capture();

    if let Err(e) = append_crash_log(&message, &location, &backtrace) {
        eprintln!("Failed to write crash.log: {}", e);
    }

    match mode {
        RunMode::Server => report_detailed(&message, &location, &backtrace),
        RunMode::Cli => {
            eprintln!("workdeck panicked: {}", message);
            eprintln!("Full report appended to crash.log");
        }
    }
}

fn panic_message(info: &PanicHookInfo<'_>) -> String {
    let payload = info.payload();
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

fn report_detailed(message: &str, location: &str, backtrace: &std::backtrace::Backtrace) {
    use colored::Colorize;

    let rule = "─".repeat(52);
    eprintln!();
    eprintln!("{}", rule.red());
    eprintln!("{} {}", "PANIC".red().bold(), message.white());
    eprintln!("{} {}", "at".yellow(), location.white());
    eprintln!("{}", rule.red());
    eprintln!("{}", format!("{:?}", backtrace).dimmed());
    eprintln!("{}", "Full report appended to crash.log".cyan());
    eprintln!();
}

fn append_crash_log(
    message: &str,
    location: &str,
    backtrace: &std::backtrace::Backtrace,
) -> std::io::Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open("crash.log")?;

    writeln!(file, "---- crash report {} ----", Utc::now().to_rfc3339())?;
    writeln!(file, "message:  {}", message)?;
    writeln!(file, "location: {}", location)?;
    writeln!(file, "backtrace:")?;
    writeln!(file, "{:?}", backtrace)?;
    writeln!(file)?;

    Ok(())
}
