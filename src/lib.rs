//! Workdeck - workspace dashboard service
//!
//! This library provides the core functionality for the Workdeck service:
//! request-scoped identity context, the server-rendered page shell, and
//! locale-aware display formatting.
//!
//! # Architecture
//! - `api`: HTTP services and middleware
//! - `cli`: Command-line interface definitions
//! - `config`: Configuration management
//! - `context`: Request identity and workspace models
//! - `display`: Number / currency / date formatting
//! - `errors`: Error taxonomy
//! - `runtime`: Application lifecycle and execution modes
//! - `services`: Identity resolution and page shell
//! - `system`: Logging and panic handling

pub mod api;
pub mod cli;
pub mod config;
pub mod context;
pub mod display;
pub mod errors;
pub mod runtime;
pub mod services;
pub mod system;
