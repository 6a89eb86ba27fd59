//! Static identity resolver
//!
//! 本地开发使用：每个请求都以配置中的固定用户身份登录，
//! 不需要反向代理或真实认证。

use actix_web::dev::RequestHead;
use async_trait::async_trait;
use tracing::warn;
use uuid::Uuid;

use super::provider::IdentityResolver;
use crate::config::StaticIdentityConfig;
use crate::context::{AuthenticatedUser, RequestContext, Workspace};

pub struct StaticResolver {
    context: RequestContext,
}

impl StaticResolver {
    /// 从配置构建固定身份
    ///
    /// 配置里写了 user_id / workspace_id 就用配置值（重启后身份不变，
    /// 演示数据可以按 ID 预置），没写的在构建时生成一次，
    /// 整个进程生命周期内保持不变。
    pub fn from_config(config: &StaticIdentityConfig) -> Self {
        let workspace_id = config.workspace_id.unwrap_or_else(Uuid::new_v4);
        let workspace = Workspace {
            id: workspace_id,
            name: config.workspace_name.clone(),
            slug: config.workspace_slug.clone(),
            plan: config.plan,
        };
        let user = AuthenticatedUser {
            id: config.user_id.unwrap_or_else(Uuid::new_v4),
            email: config.email.clone(),
            name: config.name.clone(),
            role: config.role,
            workspace_id,
        };

        let context = match RequestContext::authenticated(user, workspace) {
            Ok(ctx) => ctx,
            Err(e) => {
                warn!("Static identity rejected: {}, requests stay anonymous", e);
                RequestContext::anonymous()
            }
        };

        Self { context }
    }
}

#[async_trait]
impl IdentityResolver for StaticResolver {
    async fn resolve(&self, _head: &RequestHead) -> Option<RequestContext> {
        if self.context.is_authenticated() {
            Some(self.context.clone())
        } else {
            None
        }
    }

    fn name(&self) -> &'static str {
        "Static"
    }
}
