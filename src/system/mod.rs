//! System-level modules
//!
//! This module contains system-level functionality:
//! - Logging initialization
//! - Panic handling

pub mod logging;
pub mod panic_handler;

pub use logging::init_logging;
pub use panic_handler::{RunMode, install_panic_hook};
