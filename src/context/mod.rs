//! Request identity context
//!
//! 用户与工作区模型，以及挂在每个请求上的 [`RequestContext`]。

pub mod models;
pub mod request_context;

pub use models::{AuthenticatedUser, Plan, Role, Workspace};
pub use request_context::RequestContext;
