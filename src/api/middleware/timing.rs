//! HTTP timing middleware
//!
//! 记录每个请求的处理耗时，慢请求以 warn 级别输出。

use actix_service::{Service, Transform};
use actix_web::{
    Error,
    dev::{ServiceRequest, ServiceResponse},
    http::header::{HeaderName, HeaderValue},
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;
use std::time::Instant;
use tracing::{debug, warn};

/// 慢请求阈值（毫秒）
const SLOW_REQUEST_MS: u128 = 1_000;

/// HTTP timing middleware factory
#[derive(Clone, Default)]
pub struct TimingMiddleware;

impl<S, B> Transform<S, ServiceRequest> for TimingMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = TimingService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TimingService {
            service: Rc::new(service),
        }))
    }
}

pub struct TimingService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for TimingService<S>
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
        let start = Instant::now();
        let method = req.method().to_string();
        let path = req.path().to_string();

        Box::pin(async move {
            let mut result = srv.call(req).await;
            let elapsed = start.elapsed();

            match &mut result {
                Ok(response) => {
                    let status = response.status();
                    if elapsed.as_millis() >= SLOW_REQUEST_MS {
                        warn!("{} {} -> {} in {:?} (slow)", method, path, status, elapsed);
                    } else {
                        debug!("{} {} -> {} in {:?}", method, path, status, elapsed);
                    }

                    // 耗时回传到响应头，毫秒
                    if let Ok(value) = HeaderValue::from_str(&format!("{}ms", elapsed.as_millis()))
                    {
                        response
                            .headers_mut()
                            .insert(HeaderName::from_static("x-response-time"), value);
                    }
                }
                Err(e) => {
                    warn!("{} {} failed after {:?}: {}", method, path, elapsed, e);
                }
            }

            result
        })
    }
}
