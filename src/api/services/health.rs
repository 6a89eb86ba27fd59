use actix_web::{HttpResponse, Responder, web};
use std::time::Instant;
use tracing::{error, info, trace};

use crate::api::types::{
    ApiResponse, HealthChecks, HealthIdentityCheck, HealthResponse, HealthTemplateCheck,
};
use crate::display::{FormatOptions, relative_time_from_now};
use crate::services::{IdentityProvider, PageShell};

use super::super::error_code::ErrorCode;

// 应用启动时间结构体
#[derive(Clone, Debug)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

/// Health Service
///
/// 基础设施探针，直接检查模板与身份解析器，不经过业务层。
/// k8s probes 要求快速响应，这里不做任何耗时操作。
pub struct HealthService;

impl HealthService {
    pub async fn health_check(
        app_start_time: web::Data<AppStartTime>,
        identity: web::Data<IdentityProvider>,
        display: web::Data<FormatOptions>,
    ) -> impl Responder {
        let start_time = Instant::now();
        trace!("Received health check request");

        // 检查页面外壳模板
        let template_status = match PageShell::verify_template() {
            Ok(()) => HealthTemplateCheck {
                status: "healthy".to_string(),
                error: None,
            },
            Err(e) => {
                error!("Template health check failed: {}", e);
                HealthTemplateCheck {
                    status: "unhealthy".to_string(),
                    error: Some(e.message().to_string()),
                }
            }
        };

        let identity_status = HealthIdentityCheck {
            status: "healthy".to_string(),
            resolver: identity.resolver_name().to_string(),
        };

        let now = chrono::Utc::now();
        let uptime_seconds = (now - app_start_time.start_datetime).num_seconds().max(0) as u32;

        // "2h ago" 形式的启动时间，超过一周自动变为绝对日期
        let started = relative_time_from_now(app_start_time.start_datetime, &display);

        let is_healthy = template_status.status == "healthy";

        let health_data = HealthResponse {
            status: if is_healthy {
                "healthy".to_string()
            } else {
                "unhealthy".to_string()
            },
            timestamp: now.to_rfc3339(),
            uptime: uptime_seconds,
            started: started.clone(),
            checks: HealthChecks {
                template: template_status,
                identity: identity_status,
            },
            response_time_ms: start_time.elapsed().as_millis() as u32,
        };

        let health_response = ApiResponse {
            code: if is_healthy {
                ErrorCode::Success as i32
            } else {
                ErrorCode::ServiceUnavailable as i32
            },
            message: if is_healthy {
                "OK".to_string()
            } else {
                "Service Unavailable".to_string()
            },
            data: Some(health_data),
        };

        let response_status = if is_healthy {
            actix_web::http::StatusCode::OK
        } else {
            actix_web::http::StatusCode::SERVICE_UNAVAILABLE
        };

        info!(
            "Health check completed in {:?}, status: {}, started: {}",
            start_time.elapsed(),
            if is_healthy { "healthy" } else { "unhealthy" },
            started
        );

        HttpResponse::build(response_status)
            .append_header(("Content-Type", "application/json; charset=utf-8"))
            .json(health_response)
    }

    // 就绪检查，外壳模板可用才算就绪
    pub async fn readiness_check() -> impl Responder {
        trace!("Received readiness check request");

        match PageShell::verify_template() {
            Ok(()) => HttpResponse::Ok()
                .append_header(("Content-Type", "text/plain"))
                .body("OK"),
            Err(e) => {
                error!("Readiness check failed: {}", e);
                HttpResponse::ServiceUnavailable()
                    .append_header(("Content-Type", "text/plain"))
                    .body("Shell template unavailable")
            }
        }
    }

    // 活跃性检查，进程活着即可
    pub async fn liveness_check() -> impl Responder {
        trace!("Received liveness check request");

        HttpResponse::NoContent().finish()
    }
}

/// Health 路由配置
pub fn health_routes() -> actix_web::Scope {
    web::scope("")
        .route("", web::get().to(HealthService::health_check))
        .route("", web::head().to(HealthService::health_check))
        .route("/ready", web::get().to(HealthService::readiness_check))
        .route("/ready", web::head().to(HealthService::readiness_check))
        .route("/live", web::get().to(HealthService::liveness_check))
        .route("/live", web::head().to(HealthService::liveness_check))
}
