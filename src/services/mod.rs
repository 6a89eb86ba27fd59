//! Service layer for business logic
//!
//! This module provides unified business logic that can be shared between
//! different interfaces (HTTP API, CLI).

pub mod identity;
pub mod layout;

pub use identity::{IdentityClaims, IdentityProvider, IdentityResolver};
pub use layout::PageShell;
