//! Trusted header resolver
//!
//! 部署在可信反向代理之后时使用：代理完成认证后把身份声明以 JSON
//! 写入指定请求头，应用直接信任该头的内容。
//! 代理必须剥离外部请求中的同名头，否则任何人都能伪造身份。

use actix_web::dev::RequestHead;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use super::provider::IdentityResolver;
use crate::context::{AuthenticatedUser, RequestContext, Workspace};

/// 可信头中携带的身份声明
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityClaims {
    pub user: AuthenticatedUser,
    pub workspace: Workspace,
}

pub struct TrustedHeaderResolver {
    header_name: String,
}

impl TrustedHeaderResolver {
    pub fn new(header_name: &str) -> Self {
        Self {
            header_name: header_name.to_lowercase(),
        }
    }

    fn parse_claims(&self, head: &RequestHead) -> Option<IdentityClaims> {
        let value = head.headers().get(self.header_name.as_str())?;
        let raw = match value.to_str() {
            Ok(raw) => raw,
            Err(_) => {
                warn!("Identity header rejected: value is not valid UTF-8");
                return None;
            }
        };

        match serde_json::from_str::<IdentityClaims>(raw) {
            Ok(claims) => Some(claims),
            Err(e) => {
                warn!("Identity header rejected: malformed claims: {}", e);
                None
            }
        }
    }
}

#[async_trait]
impl IdentityResolver for TrustedHeaderResolver {
    /// 解析身份声明
    ///
    /// 1. 头缺失 → 匿名（正常情况，未登录请求）
    /// 2. JSON 损坏 → 匿名 + warn
    /// 3. 用户与工作区不配对 → 匿名 + warn，绝不挂上错误租户
    async fn resolve(&self, head: &RequestHead) -> Option<RequestContext> {
        let claims = self.parse_claims(head)?;

        match RequestContext::authenticated(claims.user, claims.workspace) {
            Ok(ctx) => {
                trace!("Identity resolved for {}", ctx.actor());
                Some(ctx)
            }
            Err(e) => {
                warn!("Identity header rejected: {}", e);
                None
            }
        }
    }

    fn name(&self) -> &'static str {
        "TrustedHeader"
    }
}
