//! Lifecycle management
//!
//! Startup preparation and graceful shutdown handling.

pub mod shutdown;
pub mod startup;
