//! Identity Provider 抽象层
//!
//! 统一的请求身份解析接口，根据配置自动选择实现：
//! 1. mode = "trusted-header" → TrustedHeaderResolver
//! 2. mode = "static" → StaticResolver
//! 3. mode = "none" → NullResolver

use std::sync::Arc;

use actix_web::dev::RequestHead;
use async_trait::async_trait;
use tracing::{debug, info};

use super::null::NullResolver;
use super::static_identity::StaticResolver;
use super::trusted_header::TrustedHeaderResolver;
use crate::config::{IdentityConfig, IdentityMode};
use crate::context::RequestContext;

/// 请求身份解析 trait
#[async_trait]
pub trait IdentityResolver: Send + Sync {
    /// 从请求头解析身份，解析不出时返回 None（匿名）
    async fn resolve(&self, head: &RequestHead) -> Option<RequestContext>;

    /// 获取 resolver 名称（用于日志）
    fn name(&self) -> &'static str;
}

/// 统一 Identity Provider
///
/// 启动时根据配置自动选择实现
pub struct IdentityProvider {
    inner: Arc<dyn IdentityResolver>,
}

impl IdentityProvider {
    /// 根据 IdentityConfig 初始化
    pub fn from_config(config: &IdentityConfig) -> Self {
        let inner: Arc<dyn IdentityResolver> = match config.mode {
            IdentityMode::None => {
                debug!("Identity: resolution disabled, all requests are anonymous");
                Arc::new(NullResolver)
            }
            IdentityMode::Static => {
                info!(
                    "Identity: every request signed in as {}",
                    config.static_identity.email
                );
                Arc::new(StaticResolver::from_config(&config.static_identity))
            }
            IdentityMode::TrustedHeader => {
                info!("Identity: trusting claims from '{}' header", config.header);
                Arc::new(TrustedHeaderResolver::new(&config.header))
            }
        };

        info!("Identity: Initialized with {} resolver", inner.name());
        Self { inner }
    }

    /// 解析请求身份
    pub async fn resolve(&self, head: &RequestHead) -> Option<RequestContext> {
        self.inner.resolve(head).await
    }

    /// 获取当前使用的 resolver 名称
    pub fn resolver_name(&self) -> &'static str {
        self.inner.name()
    }
}

impl Clone for IdentityProvider {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
