//! Mode routing
//!
//! This module provides unified entry points for different execution modes:
//! - Server mode (HTTP server)
//! - CLI mode (configuration management commands)

pub mod cli;
pub mod server;

// Re-export mode functions for convenience
pub use cli::run_cli;
pub use server::run_server;
