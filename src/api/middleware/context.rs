//! Request context middleware
//!
//! 在进入 handler 之前解析请求身份，把 [`RequestContext`] 写入
//! request extensions。每个请求恰好写入一次；解析不出身份时写入
//! 匿名上下文，请求照常继续。

use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage,
    dev::{ServiceRequest, ServiceResponse},
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;
use tracing::trace;

use crate::context::RequestContext;
use crate::services::IdentityProvider;

/// Context 中间件工厂
#[derive(Clone)]
pub struct ContextMiddleware {
    provider: IdentityProvider,
}

impl ContextMiddleware {
    pub fn new(provider: IdentityProvider) -> Self {
        Self { provider }
    }
}

impl<S, B> Transform<S, ServiceRequest> for ContextMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = ContextService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ContextService {
            service: Rc::new(service),
            provider: self.provider.clone(),
        }))
    }
}

pub struct ContextService<S> {
    service: Rc<S>,
    provider: IdentityProvider,
}

impl<S, B> Service<ServiceRequest> for ContextService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        let provider = self.provider.clone();

        Box::pin(async move {
            let ctx = match provider.resolve(req.head()).await {
                Some(ctx) => {
                    trace!(
                        "Identity attached: {} via {}",
                        ctx.actor(),
                        provider.resolver_name()
                    );
                    ctx
                }
                None => RequestContext::anonymous(),
            };

            // 无条件覆盖写入，handler 看到的永远是本中间件的值
            req.extensions_mut().insert(ctx);

            srv.call(req).await
        })
    }
}
