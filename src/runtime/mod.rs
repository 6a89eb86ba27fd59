//! Application lifecycle and execution modes
//!
//! - `lifetime`: startup preparation and graceful shutdown
//! - `modes`: entry points for server and CLI modes

pub mod lifetime;
pub mod modes;
