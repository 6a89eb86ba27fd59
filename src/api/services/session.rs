//! 会话信息 API

use actix_web::http::StatusCode;
use actix_web::{Responder, web};
use tracing::trace;

use crate::api::error_code::ErrorCode;
use crate::api::response::{error_response, success_response};
use crate::api::types::SessionInfo;
use crate::context::RequestContext;

pub struct SessionService;

impl SessionService {
    /// 当前会话信息
    ///
    /// 已登录返回用户与工作区，未登录返回 401 错误包装。
    pub async fn me(ctx: RequestContext) -> impl Responder {
        trace!("Session lookup for {}", ctx.actor());

        match (ctx.user(), ctx.workspace()) {
            (Some(user), Some(workspace)) => success_response(SessionInfo {
                user: user.clone(),
                workspace: workspace.clone(),
            }),
            _ => error_response(
                StatusCode::UNAUTHORIZED,
                ErrorCode::Unauthorized,
                "Not signed in",
            ),
        }
    }
}

/// Session 路由配置
pub fn session_routes() -> actix_web::Scope {
    web::scope("/v1").route("/me", web::get().to(SessionService::me))
}
