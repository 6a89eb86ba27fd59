//! 统一 API 错误码定义

use serde_repr::{Deserialize_repr, Serialize_repr};
use ts_rs::TS;

use super::types::TS_EXPORT_PATH;
use crate::errors::WorkdeckError;

/// API 错误码枚举
///
/// 使用 serde_repr 序列化为数字，ts-rs 自动生成 TypeScript 类型。
/// 按千位分域：
/// - 0: 成功
/// - 1000-1099: 通用错误
/// - 2000-2099: 身份错误
/// - 3000-3099: 页面渲染错误
/// - 5000-5099: 配置错误
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr, TS)]
#[ts(export, export_to = TS_EXPORT_PATH)]
#[ts(rename = "ErrorCode")]
#[ts(repr(enum))]
#[repr(i32)]
pub enum ErrorCode {
    // 成功
    Success = 0,

    // 通用错误 1000-1099
    BadRequest = 1000,
    Unauthorized = 1001,
    NotFound = 1004,
    InternalServerError = 1005,
    InvalidDateFormat = 1012,
    ServiceUnavailable = 1030,

    // 身份错误 2000-2099
    IdentityRejected = 2000,

    // 页面渲染错误 3000-3099
    RenderFailed = 3000,
    TemplateMissing = 3001,

    // 配置错误 5000-5099
    ConfigInvalid = 5000,
}

impl From<WorkdeckError> for ErrorCode {
    fn from(err: WorkdeckError) -> Self {
        match err {
            WorkdeckError::Config(_) => Self::ConfigInvalid,
            WorkdeckError::Validation(_) => Self::BadRequest,
            WorkdeckError::Render(_) => Self::RenderFailed,
            WorkdeckError::TemplateMissing(_) => Self::TemplateMissing,
            WorkdeckError::IdentityRejected(_) => Self::IdentityRejected,
            WorkdeckError::NotFound(_) => Self::NotFound,
            WorkdeckError::Unauthorized(_) => Self::Unauthorized,
            WorkdeckError::Serialization(_) => Self::InternalServerError,
            WorkdeckError::DateParse(_) => Self::InvalidDateFormat,
            WorkdeckError::FileOperation(_) => Self::InternalServerError,
        }
    }
}
