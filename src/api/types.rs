//! API 类型定义

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::context::{AuthenticatedUser, Workspace};

/// 输出目录常量
pub const TS_EXPORT_PATH: &str = "dashboard/src/api/types.generated.ts";

/// 统一 API 响应包装
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ApiResponse<T> {
    pub code: i32,
    pub message: String,
    pub data: Option<T>,
}

/// 当前会话信息（GET /api/v1/me）
#[derive(Serialize, Deserialize, Clone, Debug, TS)]
#[ts(
    export,
    export_to = TS_EXPORT_PATH
)]
pub struct SessionInfo {
    pub user: AuthenticatedUser,
    pub workspace: Workspace,
}

// ============ 健康检查相关类型 ============

/// 页面模板检查状态
#[derive(Serialize, Deserialize, Clone, Debug, TS)]
#[ts(
    export,
    export_to = TS_EXPORT_PATH
)]
pub struct HealthTemplateCheck {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// 身份解析器状态
#[derive(Serialize, Deserialize, Clone, Debug, TS)]
#[ts(
    export,
    export_to = TS_EXPORT_PATH
)]
pub struct HealthIdentityCheck {
    pub status: String,
    pub resolver: String,
}

/// 健康检查项容器
#[derive(Serialize, Deserialize, Clone, Debug, TS)]
#[ts(
    export,
    export_to = TS_EXPORT_PATH
)]
pub struct HealthChecks {
    pub template: HealthTemplateCheck,
    pub identity: HealthIdentityCheck,
}

/// 健康检查响应
#[derive(Serialize, Deserialize, Clone, Debug, TS)]
#[ts(
    export,
    export_to = TS_EXPORT_PATH
)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub uptime: u32,
    /// 启动时间的展示形式（如 "2h ago"，超过一周为绝对日期）
    pub started: String,
    pub checks: HealthChecks,
    pub response_time_ms: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::error_code::ErrorCode;
    use crate::context::{Plan, Role};
    use crate::display::Locale;

    #[test]
    fn export_typescript_types() {
        // 运行此测试会自动生成 TypeScript 类型文件
        // cargo test export_typescript_types -- --nocapture

        // Session types
        SessionInfo::export_all(&ts_rs::Config::from_env()).expect("Failed to export SessionInfo");
        AuthenticatedUser::export_all(&ts_rs::Config::from_env()).expect("Failed to export AuthenticatedUser");
        Workspace::export_all(&ts_rs::Config::from_env()).expect("Failed to export Workspace");
        Role::export_all(&ts_rs::Config::from_env()).expect("Failed to export Role");
        Plan::export_all(&ts_rs::Config::from_env()).expect("Failed to export Plan");

        // Display types
        Locale::export_all(&ts_rs::Config::from_env()).expect("Failed to export Locale");

        // Health check types
        HealthTemplateCheck::export_all(&ts_rs::Config::from_env()).expect("Failed to export HealthTemplateCheck");
        HealthIdentityCheck::export_all(&ts_rs::Config::from_env()).expect("Failed to export HealthIdentityCheck");
        HealthChecks::export_all(&ts_rs::Config::from_env()).expect("Failed to export HealthChecks");
        HealthResponse::export_all(&ts_rs::Config::from_env()).expect("Failed to export HealthResponse");

        // Error codes
        ErrorCode::export_all(&ts_rs::Config::from_env()).expect("Failed to export ErrorCode");

        println!("TypeScript types exported to {}", TS_EXPORT_PATH);
    }
}
