//! API 模块常量定义
//!
//! 包含身份头、请求追踪等相关的硬编码常量。

/// 身份声明请求头的默认名称（可通过 identity.header 配置覆盖）
pub const DEFAULT_IDENTITY_HEADER: &str = "x-workdeck-identity";

/// 响应中回传请求 ID 的头
pub const REQUEST_ID_HEADER: &str = "x-request-id";
