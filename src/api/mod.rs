//! HTTP API 模块
//!
//! HTTP 服务、中间件与统一响应格式。

pub mod constants;
pub mod error_code;
pub mod middleware;
pub mod response;
pub mod services;
pub mod types;

pub use error_code::ErrorCode;
pub use types::ApiResponse;
