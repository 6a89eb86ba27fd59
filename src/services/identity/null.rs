//! Null resolver
//!
//! 身份解析关闭时使用，所有请求一律匿名。

use actix_web::dev::RequestHead;
use async_trait::async_trait;

use super::provider::IdentityResolver;
use crate::context::RequestContext;

pub struct NullResolver;

#[async_trait]
impl IdentityResolver for NullResolver {
    async fn resolve(&self, _head: &RequestHead) -> Option<RequestContext> {
        None
    }

    fn name(&self) -> &'static str {
        "Null"
    }
}
